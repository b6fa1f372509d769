mod age_selection;
mod instructions;
mod result;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use age_selection::AgeSelectionView;
pub use instructions::InstructionsView;
pub use result::ResultView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use test::TestView;
pub use welcome::WelcomeView;
