#[cfg(any(feature = "local-bin", feature = "local-lib"))]
mod local;
#[cfg(any(feature = "local-bin", feature = "local-lib"))]
pub use local::*;

#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
mod remote;
#[cfg(not(any(feature = "local-bin", feature = "local-lib")))]
pub use remote::*;

/// Page size used when the route does not carry one.
pub const DEFAULT_PAGE_COUNT: i64 = 100;
/// Reserved count meaning "return every ranked player in one page".
/// A page requested at this size never has a next page.
pub const VIEW_ALL_COUNT: i64 = 1000;

pub const CANONICAL_TOP_PATH: &str = "/";
pub const TOP_GLOBAL_TITLE: &str = "Top Players | Puddle Farm";
