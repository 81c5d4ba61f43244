//! Assertions: caller-supplied vetoes consulted after a structural grant

use tracing::debug;

use super::role::Role;
use super::system::Rbac;

/// A predicate that can deny a permission the role hierarchy already grants
///
/// The engine only calls an assertion once the role (or an ancestor) owns the
/// permission, so an assertion can narrow access but never widen it.
/// Any closure `Fn(&Rbac, &Role, &str) -> bool` is an assertion.
#[cfg_attr(test, mockall::automock)]
pub trait Assertion {
    /// Return false to deny `permission` for `role`
    fn assert(&self, rbac: &Rbac, role: &Role, permission: &str) -> bool;
}

impl<F> Assertion for F
where
    F: Fn(&Rbac, &Role, &str) -> bool,
{
    fn assert(&self, rbac: &Rbac, role: &Role, permission: &str) -> bool {
        self(rbac, role, permission)
    }
}

/// How an [`AssertionAggregate`] combines its members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregateMode {
    /// Every assertion must pass
    #[default]
    All,
    /// At least one assertion must pass
    AtLeastOne,
}

/// Several assertions evaluated as one
///
/// Members are evaluated in insertion order and evaluation stops as soon as
/// the outcome is known. An aggregate with no members denies.
pub struct AssertionAggregate<'a> {
    assertions: Vec<Box<dyn Assertion + 'a>>,
    mode: AggregateMode,
}

impl<'a> AssertionAggregate<'a> {
    /// Create an empty aggregate combining members with `mode`
    pub fn new(mode: AggregateMode) -> Self {
        Self {
            assertions: Vec::new(),
            mode,
        }
    }

    /// Add an assertion to the aggregate
    pub fn with_assertion<A: Assertion + 'a>(mut self, assertion: A) -> Self {
        self.assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion to the aggregate in place
    pub fn add_assertion<A: Assertion + 'a>(&mut self, assertion: A) {
        self.assertions.push(Box::new(assertion));
    }

    /// How members are combined
    pub fn mode(&self) -> AggregateMode {
        self.mode
    }

    /// Number of member assertions
    pub fn len(&self) -> usize {
        self.assertions.len()
    }

    /// Whether the aggregate has no members, in which case it denies
    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty()
    }
}

impl Assertion for AssertionAggregate<'_> {
    fn assert(&self, rbac: &Rbac, role: &Role, permission: &str) -> bool {
        if self.assertions.is_empty() {
            debug!("Empty assertion aggregate denies '{}'", permission);
            return false;
        }

        match self.mode {
            AggregateMode::All => self
                .assertions
                .iter()
                .all(|assertion| assertion.assert(rbac, role, permission)),
            AggregateMode::AtLeastOne => self
                .assertions
                .iter()
                .any(|assertion| assertion.assert(rbac, role, permission)),
        }
    }
}
