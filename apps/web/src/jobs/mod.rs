// Job recommendation flow: preference form, proxy to the recommendation API,
// salary ranking, and the results page.

pub mod flash;
pub mod handlers;
pub mod ranking;
pub mod views;
