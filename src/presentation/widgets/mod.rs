mod footer_bar;
mod input;
mod nav_bar;
mod score_bar;
mod step_indicator;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use input::TextInput;
pub use nav_bar::{NavBar, NavBarStyle};
pub use score_bar::{score_color, score_line};
pub use step_indicator::StepIndicator;
