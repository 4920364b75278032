/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation (palette list in Normal mode, pick cursor in Pick mode)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveTop,
    MoveBottom,

    // Fast pick cursor movement
    JumpUp,
    JumpDown,
    JumpLeft,
    JumpRight,

    // RGB form
    NextField,
    PrevField,
    ClearField,

    // Color operations
    Recognize,
    UsePaletteColor,
    OpenImage,
    PickPixel,
    Sample,
    ClearHistory,

    // Mode switching
    EnterInsertMode,
    EnterNormalMode,

    // Dialog
    Confirm,
    Cancel,
    Complete,

    // Input
    InsertChar(char),
    DeleteChar,

    // Other
    ToggleHelp,
    Quit,
    ForceQuit,
}

impl Action {
    /// Parse action from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "MoveLeft" => Some(Action::MoveLeft),
            "MoveRight" => Some(Action::MoveRight),
            "MoveTop" => Some(Action::MoveTop),
            "MoveBottom" => Some(Action::MoveBottom),
            "JumpUp" => Some(Action::JumpUp),
            "JumpDown" => Some(Action::JumpDown),
            "JumpLeft" => Some(Action::JumpLeft),
            "JumpRight" => Some(Action::JumpRight),
            "NextField" => Some(Action::NextField),
            "PrevField" => Some(Action::PrevField),
            "ClearField" => Some(Action::ClearField),
            "Recognize" => Some(Action::Recognize),
            "UsePaletteColor" => Some(Action::UsePaletteColor),
            "OpenImage" => Some(Action::OpenImage),
            "PickPixel" => Some(Action::PickPixel),
            "Sample" => Some(Action::Sample),
            "ClearHistory" => Some(Action::ClearHistory),
            "EnterInsertMode" => Some(Action::EnterInsertMode),
            "EnterNormalMode" => Some(Action::EnterNormalMode),
            "Confirm" => Some(Action::Confirm),
            "Cancel" => Some(Action::Cancel),
            "Complete" => Some(Action::Complete),
            "DeleteChar" => Some(Action::DeleteChar),
            "ToggleHelp" => Some(Action::ToggleHelp),
            "Quit" => Some(Action::Quit),
            "ForceQuit" => Some(Action::ForceQuit),
            _ => None,
        }
    }
}
