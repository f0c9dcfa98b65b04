mod geo_bbox;

pub use geo_bbox::*;
