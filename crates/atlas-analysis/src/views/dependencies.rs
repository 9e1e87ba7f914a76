//! Declared view → input dependencies and their inversion.

use atlas_core::FxHashMap;
use smallvec::SmallVec;

use super::types::{InputField, ViewName};

/// One view and the input fields it is recomputed from.
#[derive(Debug, Clone, Copy)]
pub struct ViewBinding {
    pub view: ViewName,
    pub depends_on: &'static [InputField],
}

/// The dashboard's bindings. The event comparison view is static.
pub const VIEW_BINDINGS: &[ViewBinding] = &[
    ViewBinding {
        view: ViewName::Map,
        depends_on: &[InputField::Stance, InputField::Year],
    },
    ViewBinding {
        view: ViewName::CountyTimeseries,
        depends_on: &[InputField::Region],
    },
    ViewBinding {
        view: ViewName::Wordcloud,
        depends_on: &[InputField::WordcloudStance],
    },
    ViewBinding {
        view: ViewName::EventComparison,
        depends_on: &[],
    },
];

/// Field → dependent views, inverted from a list of bindings.
///
/// Dependents are listed in binding declaration order, so recomputation
/// and emission order are stable.
#[derive(Debug, Clone)]
pub struct DependencyTable {
    dependents: FxHashMap<InputField, SmallVec<[ViewName; 4]>>,
    dependencies: FxHashMap<ViewName, SmallVec<[InputField; 4]>>,
    views: Vec<ViewName>,
}

impl DependencyTable {
    pub fn new(bindings: &[ViewBinding]) -> Self {
        let mut dependents: FxHashMap<InputField, SmallVec<[ViewName; 4]>> = FxHashMap::default();
        let mut dependencies = FxHashMap::default();
        let mut views = Vec::with_capacity(bindings.len());

        for binding in bindings {
            views.push(binding.view);
            dependencies.insert(binding.view, SmallVec::from_slice(binding.depends_on));
            for field in binding.depends_on {
                let entry = dependents.entry(*field).or_default();
                if !entry.contains(&binding.view) {
                    entry.push(binding.view);
                }
            }
        }

        Self {
            dependents,
            dependencies,
            views,
        }
    }

    /// The table for the standard dashboard views.
    pub fn standard() -> Self {
        Self::new(VIEW_BINDINGS)
    }

    /// Views that must be recomputed when `field` changes.
    pub fn dependents(&self, field: InputField) -> &[ViewName] {
        self.dependents.get(&field).map_or(&[], |v| v.as_slice())
    }

    /// Fields a view is recomputed from. Empty for static views.
    pub fn dependencies(&self, view: ViewName) -> &[InputField] {
        self.dependencies.get(&view).map_or(&[], |v| v.as_slice())
    }

    /// Every bound view, in declaration order.
    pub fn views(&self) -> &[ViewName] {
        &self.views
    }
}

impl Default for DependencyTable {
    fn default() -> Self {
        Self::standard()
    }
}
