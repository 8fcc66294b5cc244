use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::model::RoutableEdge;
use crate::routing::{EdgeRouter, ManhattanEdgeRouter, PolylineEdgeRouter};

/// String-keyed strategy lookup with a guaranteed default.
///
/// Built once at startup. A default kind that is not among the registered strategies is a
/// configuration bug and fails construction; after that, [`EdgeRouterRegistry::get`] cannot
/// fail and unknown kinds silently fall back to the default.
pub struct EdgeRouterRegistry {
    routers: FxHashMap<&'static str, Box<dyn EdgeRouter>>,
    default_kind: &'static str,
}

impl EdgeRouterRegistry {
    pub fn new(default_kind: &'static str, routers: Vec<Box<dyn EdgeRouter>>) -> Result<Self> {
        let mut map: FxHashMap<&'static str, Box<dyn EdgeRouter>> = FxHashMap::default();
        for router in routers {
            let kind = router.kind();
            if map.insert(kind, router).is_some() {
                return Err(Error::DuplicateRouter { kind });
            }
            tracing::debug!(kind, "registered edge router");
        }
        if !map.contains_key(default_kind) {
            return Err(Error::UnknownDefaultRouter { kind: default_kind });
        }
        Ok(EdgeRouterRegistry {
            routers: map,
            default_kind,
        })
    }

    /// The stock setup: polyline and manhattan, defaulting to polyline.
    pub fn default_routers() -> Self {
        let mut routers: FxHashMap<&'static str, Box<dyn EdgeRouter>> = FxHashMap::default();
        routers.insert(
            PolylineEdgeRouter::KIND,
            Box::new(PolylineEdgeRouter::default()),
        );
        routers.insert(
            ManhattanEdgeRouter::KIND,
            Box::new(ManhattanEdgeRouter::default()),
        );
        EdgeRouterRegistry {
            routers,
            default_kind: PolylineEdgeRouter::KIND,
        }
    }

    pub fn default_kind(&self) -> &'static str {
        self.default_kind
    }

    /// Strategy for `kind`, the default for `None` and for kinds nobody registered.
    pub fn get(&self, kind: Option<&str>) -> &dyn EdgeRouter {
        let key = kind
            .filter(|k| self.routers.contains_key(*k))
            .unwrap_or(self.default_kind);
        // The constructors guarantee the default kind is registered.
        self.routers[key].as_ref()
    }

    pub fn router_for(&self, edge: &RoutableEdge) -> &dyn EdgeRouter {
        self.get(edge.router_kind.as_deref())
    }
}

impl std::fmt::Debug for EdgeRouterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.routers.keys().copied().collect();
        kinds.sort_unstable();
        f.write_fmt(format_args!(
            "EdgeRouterRegistry {{ kinds: {:?}, default: {:?} }}",
            kinds, self.default_kind
        ))
    }
}
