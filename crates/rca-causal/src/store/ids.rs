use std::collections::HashSet;

use rca_core::traits::IIdGenerator;

/// Wraps the configured generator so that no id is handed out twice or
/// collides with an id already present in hydrated data.
pub(crate) struct UniqueIds {
    inner: Box<dyn IIdGenerator>,
    taken: HashSet<String>,
}

impl UniqueIds {
    pub(crate) fn new(inner: Box<dyn IIdGenerator>) -> Self {
        Self {
            inner,
            taken: HashSet::new(),
        }
    }

    /// Mark ids that arrived from outside as in use.
    pub(crate) fn reserve<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.taken.extend(ids.into_iter().map(str::to_string));
    }
}

impl IIdGenerator for UniqueIds {
    fn next_id(&mut self) -> String {
        loop {
            let id = self.inner.next_id();
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}
