//! Test fixtures and data factories
//!
//! Provides factory methods for building role hierarchies with sensible
//! defaults. All factories create real registries, not mocks.

use rbac_engine::{Assertion, Rbac, Role};
use std::cell::Cell;

/// Factory for creating test hierarchies
pub struct HierarchyFactory;

impl HierarchyFactory {
    /// Publishing hierarchy
    ///
    /// Viewer owns `post.view` and is the base of Manager and Editor.
    /// Manager owns `post.publish`; Editor owns `post.edit` and inherits from
    /// both Manager and Viewer; Administrator owns `user.manage` and inherits
    /// from Manager.
    pub fn publishing() -> Rbac {
        let mut rbac = Rbac::new();

        rbac.add_role("Viewer").unwrap().add_permission("post.view");
        rbac.add_role_with_parents("Manager", ["Viewer"])
            .unwrap()
            .add_permission("post.publish");
        rbac.add_role_with_parents("Editor", ["Manager", "Viewer"])
            .unwrap()
            .add_permission("post.edit");
        rbac.add_role_with_parents("Administrator", ["Manager"])
            .unwrap()
            .add_permission("user.manage");

        rbac
    }

    /// Diamond: `v` inherits from `e` and `m`, both of which inherit from `root`
    pub fn diamond() -> Rbac {
        let mut rbac = Rbac::new();

        rbac.add_role("root").unwrap().add_permission("root.read");
        rbac.add_role_with_parents("e", ["root"])
            .unwrap()
            .add_permission("pe");
        rbac.add_role_with_parents("m", ["root"])
            .unwrap()
            .add_permission("pm");
        rbac.add_role_with_parents("v", ["e", "m"]).unwrap();

        rbac
    }

    /// A single chain `level0 <- level1 <- ... <- level{depth-1}`
    ///
    /// Only `level0` owns a permission, `chain.root`.
    pub fn chain(depth: usize) -> Rbac {
        let mut rbac = Rbac::new();
        rbac.add_role("level0").unwrap().add_permission("chain.root");
        for level in 1..depth {
            rbac.add_role_with_parents(format!("level{}", level), [format!("level{}", level - 1)])
                .unwrap();
        }
        rbac
    }
}

/// Assertion that records how often it was consulted
pub struct CountingAssertion {
    calls: Cell<usize>,
    verdict: bool,
}

impl CountingAssertion {
    pub fn allowing() -> Self {
        Self {
            calls: Cell::new(0),
            verdict: true,
        }
    }

    pub fn denying() -> Self {
        Self {
            calls: Cell::new(0),
            verdict: false,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Assertion for CountingAssertion {
    fn assert(&self, _rbac: &Rbac, _role: &Role, _permission: &str) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.verdict
    }
}
