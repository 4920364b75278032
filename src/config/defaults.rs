use super::KeyBinding;

/// Built-in key bindings, consulted after any user bindings
pub fn default_bindings() -> Vec<KeyBinding> {
    let normal = |key: &str, action: &str| KeyBinding::new(key, action).with_mode("Normal");
    let insert = |key: &str, action: &str| KeyBinding::new(key, action).with_mode("Insert");
    let pick = |key: &str, action: &str| KeyBinding::new(key, action).with_mode("Pick");
    let dialog = |key: &str, action: &str| KeyBinding::new(key, action).with_mode("Dialog");

    vec![
        KeyBinding::new("c", "ForceQuit").with_mods("Control"),
        // Normal
        normal("q", "Quit"),
        normal("j", "MoveDown"),
        normal("Down", "MoveDown"),
        normal("k", "MoveUp"),
        normal("Up", "MoveUp"),
        normal("g", "MoveTop"),
        normal("G", "MoveBottom"),
        normal("Enter", "Recognize"),
        normal("i", "EnterInsertMode"),
        normal("Tab", "EnterInsertMode"),
        normal("u", "UsePaletteColor"),
        normal("p", "PickPixel"),
        normal("o", "OpenImage"),
        normal("X", "ClearHistory"),
        normal("?", "ToggleHelp"),
        // Insert
        insert("Esc", "EnterNormalMode"),
        insert("Enter", "Recognize"),
        insert("Tab", "NextField"),
        insert("Down", "NextField"),
        insert("BackTab", "PrevField"),
        insert("Up", "PrevField"),
        KeyBinding::new("u", "ClearField")
            .with_mods("Control")
            .with_mode("Insert"),
        // Pick
        pick("h", "MoveLeft"),
        pick("Left", "MoveLeft"),
        pick("l", "MoveRight"),
        pick("Right", "MoveRight"),
        pick("k", "MoveUp"),
        pick("Up", "MoveUp"),
        pick("j", "MoveDown"),
        pick("Down", "MoveDown"),
        pick("H", "JumpLeft"),
        pick("L", "JumpRight"),
        pick("K", "JumpUp"),
        pick("J", "JumpDown"),
        pick("Enter", "Sample"),
        pick("Space", "Sample"),
        pick("Esc", "Cancel"),
        pick("q", "Cancel"),
        // Dialog
        dialog("Enter", "Confirm"),
        dialog("Esc", "Cancel"),
        dialog("Tab", "Complete"),
    ]
}
