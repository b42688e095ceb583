mod chart;
mod dashboard;
mod page;
mod server;

pub use chart::ChartFigure;
pub use dashboard::Dashboard;
pub use server::serve;
