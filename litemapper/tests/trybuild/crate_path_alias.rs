//! The `crate` override points generated code at a renamed import.

use litemapper as object_mapper;

use object_mapper::Mappable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Mappable)]
#[mappable(crate = "object_mapper")]
struct Widget {
    name: String,
    mass_grams: u32,
}

fn main() {
    let descriptor = <Widget as object_mapper::Mappable>::descriptor();
    assert_eq!(descriptor.type_name(), "Widget");
    assert_eq!(descriptor.fields().len(), 2);
}
