mod help_dialog;
mod help_footer;
mod history_list;
mod image_view;
mod load_image_dialog;
mod palette_list;
mod result_panel;
mod rgb_form;

pub use help_dialog::render_help_dialog;
pub use help_footer::render_help_footer;
pub use history_list::render_history_list;
pub use image_view::{render_image_view, Viewport};
pub use load_image_dialog::render_load_image_dialog;
pub use palette_list::render_palette_list;
pub use result_panel::render_result_panel;
pub use rgb_form::render_rgb_form;
