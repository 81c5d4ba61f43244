//! Assertion integration tests
//!
//! Tests for the veto hook consulted after a structural grant.

#[cfg(test)]
mod tests {
    use crate::common::{CountingAssertion, HierarchyFactory};
    use rbac_engine::{AggregateMode, AssertionAggregate, Rbac, Role};

    #[test]
    fn test_assertion_vetoes_structural_grant() {
        let rbac = HierarchyFactory::publishing();
        let assertion = CountingAssertion::denying();

        assert!(
            !rbac
                .is_granted("Editor", "post.edit", Some(&assertion))
                .unwrap()
        );
        assert_eq!(assertion.calls(), 1);
    }

    #[test]
    fn test_assertion_never_invoked_on_structural_denial() {
        let rbac = HierarchyFactory::publishing();
        let assertion = CountingAssertion::allowing();

        assert!(
            !rbac
                .is_granted("Viewer", "post.edit", Some(&assertion))
                .unwrap()
        );
        assert!(
            !rbac
                .is_granted("Administrator", "post.edit", Some(&assertion))
                .unwrap()
        );
        assert_eq!(assertion.calls(), 0);
    }

    #[test]
    fn test_assertion_cannot_widen_access() {
        let rbac = HierarchyFactory::publishing();
        let always = |_: &Rbac, _: &Role, _: &str| true;

        assert!(
            !rbac
                .is_granted("Viewer", "user.manage", Some(&always))
                .unwrap()
        );
    }

    #[test]
    fn test_assertion_with_captured_state() {
        let rbac = HierarchyFactory::publishing();
        let post_author = "alice".to_string();
        let current_user = "bob".to_string();

        let owns_post = |_: &Rbac, _: &Role, _: &str| post_author == current_user;
        assert!(
            !rbac
                .is_granted("Editor", "post.edit", Some(&owns_post))
                .unwrap()
        );

        let current_user = "alice".to_string();
        let owns_post = |_: &Rbac, _: &Role, _: &str| post_author == current_user;
        assert!(
            rbac.is_granted("Editor", "post.edit", Some(&owns_post))
                .unwrap()
        );
    }

    #[test]
    fn test_assertion_receives_resolved_role_and_permission() {
        let rbac = HierarchyFactory::publishing();
        let expected = rbac.get_role("Manager").unwrap();

        let inspect = |engine: &Rbac, role: &Role, permission: &str| {
            role == &expected && permission == "post.view" && engine.len() == 4
        };
        assert!(
            rbac.is_granted("Manager", "post.view", Some(&inspect))
                .unwrap()
        );
    }

    #[test]
    fn test_bulk_checks_consult_assertion_per_permission() {
        let rbac = HierarchyFactory::publishing();
        let assertion = CountingAssertion::allowing();

        assert!(
            rbac.is_granted_all(
                "Administrator",
                &["user.manage", "post.publish", "post.view"],
                Some(&assertion)
            )
            .unwrap()
        );
        assert_eq!(assertion.calls(), 3);
    }

    #[test]
    fn test_aggregate_short_circuits() {
        let rbac = HierarchyFactory::publishing();
        let aggregate = AssertionAggregate::new(AggregateMode::AtLeastOne)
            .with_assertion(CountingAssertion::allowing())
            .with_assertion(|_: &Rbac, _: &Role, _: &str| -> bool {
                panic!("should not be reached")
            });

        assert_eq!(aggregate.mode(), AggregateMode::AtLeastOne);
        assert!(
            rbac.is_granted("Editor", "post.edit", Some(&aggregate))
                .unwrap()
        );
    }

    #[test]
    fn test_aggregate_all_requires_every_member() {
        let rbac = HierarchyFactory::publishing();
        let mut aggregate = AssertionAggregate::new(AggregateMode::All);
        aggregate.add_assertion(CountingAssertion::allowing());
        aggregate.add_assertion(CountingAssertion::denying());

        assert!(
            !rbac
                .is_granted("Editor", "post.edit", Some(&aggregate))
                .unwrap()
        );
    }

    #[test]
    fn test_detailed_check_lists_sources() {
        let rbac = HierarchyFactory::publishing();

        let check = rbac
            .check_permission_detailed("Administrator", "post.view", None)
            .unwrap();
        assert!(check.granted);
        assert_eq!(check.granted_by_roles, vec!["Viewer".to_string()]);

        let deny = CountingAssertion::denying();
        let check = rbac
            .check_permission_detailed("Administrator", "post.view", Some(&deny))
            .unwrap();
        assert!(!check.granted);
        assert!(check.denial_reason.unwrap().contains("Assertion denied"));
    }
}
