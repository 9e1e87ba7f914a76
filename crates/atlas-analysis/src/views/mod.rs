//! Reactive view wiring: an explicit dependency table plus a dispatcher.

pub mod dependencies;
pub mod graph;
pub mod payloads;
pub mod sink;
pub mod types;

pub use dependencies::{DependencyTable, ViewBinding, VIEW_BINDINGS};
pub use graph::{Session, ViewGraph, ViewUpdate};
pub use payloads::{
    ColorDomain, CountySeries, CountyTimeseriesView, EventComparisonView, EventPoint, ImageId,
    MapView, SeriesPoint, ViewPayload, WordcloudImage, WordcloudView,
};
pub use sink::{RecordingSink, ViewSink};
pub use types::{InputChange, InputField, Selection, ViewName};
