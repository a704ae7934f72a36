pub mod alert_form;
pub mod controls;
pub mod slots;
pub mod template;
pub mod utils;

pub use alert_form::*;
pub use controls::*;
pub use slots::*;
pub use template::*;
pub use utils::*;
