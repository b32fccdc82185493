//! The page behaviors, in initialization order.

mod active_menu;
mod burger_menu;
mod count_up;
mod forms;
mod lazy_load;
mod micro_interactions;
mod modal;
mod portfolio_filter;
mod privacy;
mod scroll_animation;
mod scroll_spy;
mod scroll_to_top;
mod smooth_scroll;

pub use active_menu::ActiveMenu;
pub use burger_menu::BurgerMenu;
pub use count_up::CountUp;
pub use forms::Forms;
pub use lazy_load::LazyLoad;
pub use micro_interactions::MicroInteractions;
pub use modal::Modal;
pub use portfolio_filter::PortfolioFilter;
pub use privacy::Privacy;
pub use scroll_animation::ScrollAnimation;
pub use scroll_spy::ScrollSpy;
pub use scroll_to_top::ScrollToTop;
pub use smooth_scroll::SmoothScroll;
