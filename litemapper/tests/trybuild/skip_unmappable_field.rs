//! A skipped field needs no classification, so collection fields compile.

use litemapper::Mappable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Mappable)]
struct Inventory {
    warehouse: String,
    #[mappable(skip)]
    bins: Vec<String>,
}

fn main() {
    let descriptor = <Inventory as Mappable>::descriptor();
    assert_eq!(descriptor.fields().len(), 1);
    assert!(descriptor.field("bins").is_none());
}
