//! UI Components
//!
//! Leptos components for the tracker dashboard.

mod breakdown_list;
mod dashboard_panel;
mod data_transfer;
mod delete_confirm_button;
mod filter_bar;
mod github_settings;
mod notice_bar;
mod problem_card;
mod problem_form;
mod problem_list;
mod stat_card;
mod tab_bar;

pub use breakdown_list::BreakdownList;
pub use dashboard_panel::DashboardPanel;
pub use data_transfer::DataTransfer;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use github_settings::GithubSettings;
pub use notice_bar::NoticeBar;
pub use problem_card::ProblemCardItem;
pub use problem_form::ProblemForm;
pub use problem_list::ProblemList;
pub use stat_card::StatCard;
pub use tab_bar::TabBar;
