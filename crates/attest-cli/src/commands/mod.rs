pub mod answer;
pub mod catalogue;
pub mod dispatch;
pub mod draft;
pub mod migrate;
pub mod report;
pub mod save;
pub mod schema;
pub mod shared;
