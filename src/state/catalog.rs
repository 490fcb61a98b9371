//! Static data shown in the item list

/// A fixed catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataItem {
    pub id: u32,
    pub name: &'static str,
    pub value: u32,
}

pub const DATA: &[DataItem] = &[
    DataItem {
        id: 1,
        name: "Item One",
        value: 100,
    },
    DataItem {
        id: 2,
        name: "Item Two",
        value: 200,
    },
    DataItem {
        id: 3,
        name: "Item Three",
        value: 300,
    },
];
