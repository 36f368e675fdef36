//! Rendering of named daily statistics.
//!
//! A [`ViewData`] holds the vectors to show; each [`Presenter`] turns it into
//! one kind of output without modifying it.
//!
//! ```
//! use inflam_viz::{Presenter, SparklinePresenter, ViewData};
//! let mut view = ViewData::new();
//! view.insert("average", vec![0.0, 1.0, 2.0, 1.0]);
//! let mut out = Vec::new();
//! SparklinePresenter::new(4).present("demo.csv", &view, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("average"));
//! ```

mod chart;
mod error;
mod present;
mod text;
mod view;

pub use chart::*;
pub use error::VizError;
pub use present::{JsonPresenter, Presenter, SparklinePresenter, SvgPresenter, TextSummary};
pub use text::format_vector;
pub use view::ViewData;
