// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The heap is an arena of vectors indexed by [`BaseIndex`] handles. Values
//! never hold references into it, only handles, so prototype links and
//! property values are plain `Copy` data.

pub mod indexes;

use ahash::RandomState;
use hashbrown::HashMap;

use self::indexes::{BaseIndex, ObjectIndex, StringIndex};
use crate::ecmascript::{
    execution::INTRINSIC_OBJECT_COUNT,
    types::{BUILTIN_STRINGS_LIST, Object, ObjectHeapData, String, StringHeapData},
};

#[derive(Debug)]
pub struct Heap {
    pub(crate) objects: Vec<Option<ObjectHeapData>>,
    pub(crate) strings: Vec<Option<StringHeapData>>,
    /// Interning table: equal string contents always share one handle, which
    /// makes [`String`] handles usable as property keys.
    string_lookup: HashMap<Box<str>, StringIndex, RandomState>,
}

pub trait CreateHeapData<T, F> {
    /// Creates a handle for the given data. Allocating the data is **not**
    /// guaranteed.
    fn create(&mut self, data: T) -> F;
}

impl CreateHeapData<ObjectHeapData, Object> for Heap {
    fn create(&mut self, data: ObjectHeapData) -> Object {
        self.objects.push(Some(data));
        Object(ObjectIndex::last(&self.objects))
    }
}

impl CreateHeapData<&str, String> for Heap {
    fn create(&mut self, data: &str) -> String {
        if let Some(index) = self.string_lookup.get(data) {
            return String(*index);
        }
        self.strings.push(Some(StringHeapData::from_str(data)));
        let index = StringIndex::last(&self.strings);
        self.string_lookup.insert(data.into(), index);
        String(index)
    }
}

impl CreateHeapData<std::string::String, String> for Heap {
    fn create(&mut self, data: std::string::String) -> String {
        if let Some(index) = self.string_lookup.get(data.as_str()) {
            return String(*index);
        }
        self.strings.push(Some(StringHeapData::from_string(data.clone())));
        let index = StringIndex::last(&self.strings);
        self.string_lookup.insert(data.into_boxed_str(), index);
        String(index)
    }
}

impl Heap {
    pub fn new() -> Heap {
        let mut heap = Heap {
            objects: Vec::with_capacity(1024),
            strings: Vec::with_capacity(1024),
            string_lookup: HashMap::with_capacity_and_hasher(1024, RandomState::new()),
        };
        for (index, text) in BUILTIN_STRINGS_LIST.iter().enumerate() {
            let string: String = heap.create(*text);
            debug_assert_eq!(string.0.into_index(), index);
        }
        // Intrinsic objects live at fixed indexes; the realm fills them in.
        for _ in 0..INTRINSIC_OBJECT_COUNT {
            let _: Object = heap.create(ObjectHeapData::new(None));
        }
        heap
    }

    pub(crate) fn get<T>(vec: &[Option<T>], index: BaseIndex<T>) -> &T {
        vec.get(index.into_index())
            .expect("Handle out of bounds")
            .as_ref()
            .expect("Handle slot empty")
    }

    pub(crate) fn get_mut<T>(vec: &mut [Option<T>], index: BaseIndex<T>) -> &mut T {
        vec.get_mut(index.into_index())
            .expect("Handle out of bounds")
            .as_mut()
            .expect("Handle slot empty")
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
