// File: tests/tree_read_model.rs
// Tree listing / lookup behaviour against the in-memory adapters.

use std::sync::Arc;

use vibe_core::domain::{DanceStyle, MenuItem, NodeType, OrganizationNode};
use vibe_core::error::DomainError;
use vibe_core::repositories::TreeRepository;
use vibe_core::services::TreeService;
use vibe_core::tree::{NestedNode, TreeEntity, TreeQuery};
use vibe_infrastructure::InMemoryTreeRepository;

fn service<T: TreeEntity>() -> (Arc<InMemoryTreeRepository<T>>, TreeService<T>) {
    let repo = Arc::new(InMemoryTreeRepository::<T>::new());
    let service = TreeService::new(repo.clone());
    (repo, service)
}

fn style(name: &str, slug: &str, parent: Option<&DanceStyle>) -> DanceStyle {
    DanceStyle::new(name.to_string(), slug.to_string(), parent.map(|p| p.id)).unwrap()
}

fn menu(name: &str, slug: &str, order: i32, parent: Option<&MenuItem>) -> MenuItem {
    MenuItem::new(
        name.to_string(),
        slug.to_string(),
        format!("/{}", slug),
        String::new(),
        order,
        parent.map(|p| p.id),
    )
    .unwrap()
}

fn node(name: &str, slug: &str, parent: Option<&OrganizationNode>) -> OrganizationNode {
    let node_type = if parent.is_some() { NodeType::Branch } else { NodeType::Root };
    OrganizationNode::new(name.to_string(), slug.to_string(), node_type, parent.map(|p| p.id)).unwrap()
}

fn slugs<T: TreeEntity>(trees: &[NestedNode<T>]) -> Vec<String> {
    trees.iter().map(|t| t.node.slug().to_string()).collect()
}

#[tokio::test]
async fn test_bachata_sub_styles_in_name_order() {
    let (_, styles) = service::<DanceStyle>();
    let bachata = styles.create(&style("Bachata", "bachata", None)).await.unwrap();
    // Inserted out of name order on purpose.
    styles.create(&style("Bachata Sensual", "bachata-sensual", Some(&bachata))).await.unwrap();
    styles.create(&style("Bachata Moderna", "bachata-moderna", Some(&bachata))).await.unwrap();

    let tree = styles.get_by_slug("bachata", &TreeQuery::unbounded()).await.unwrap();

    assert_eq!(tree.child_slugs(), vec!["bachata-moderna", "bachata-sensual"]);
    assert!(tree.children.iter().all(|child| child.children.is_empty()));

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["slug"], "bachata");
    assert_eq!(json["children"].as_array().unwrap().len(), 2);
    assert_eq!(json["children"][0]["children"], serde_json::json!([]));
}

#[tokio::test]
async fn test_lookup_returns_non_root_with_its_subtree() {
    let (_, styles) = service::<DanceStyle>();
    let salsa = styles.create(&style("Salsa", "salsa", None)).await.unwrap();
    let cuban = styles.create(&style("Salsa Cubaine", "salsa-cubaine", Some(&salsa))).await.unwrap();
    styles.create(&style("Rueda", "rueda", Some(&cuban))).await.unwrap();

    let tree = styles.get_by_slug("salsa-cubaine", &TreeQuery::unbounded()).await.unwrap();
    assert_eq!(tree.node.parent_id, Some(salsa.id));
    assert_eq!(tree.child_slugs(), vec!["rueda"]);
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let (_, styles) = service::<DanceStyle>();
    let result = styles.get_by_slug("tango", &TreeQuery::unbounded()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_organization_delete_promotes_children_to_roots() {
    let (_, org) = service::<OrganizationNode>();
    let coff = org.create(&node("Capital of Fusion", "coff", None)).await.unwrap();
    org.create(&node("Paris", "paris", Some(&coff))).await.unwrap();
    org.create(&node("Lyon", "lyon", Some(&coff))).await.unwrap();

    org.delete(&coff.id).await.unwrap();

    let roots = org.list_roots(&TreeQuery::unbounded()).await.unwrap();
    assert_eq!(slugs(&roots), vec!["lyon", "paris"]);
    assert!(roots.iter().all(|root| root.node.parent_id.is_none()));
}

#[tokio::test]
async fn test_dance_style_delete_cascades() {
    let (repo, styles) = service::<DanceStyle>();
    let bachata = styles.create(&style("Bachata", "bachata", None)).await.unwrap();
    let sensual = styles.create(&style("Bachata Sensual", "bachata-sensual", Some(&bachata))).await.unwrap();
    styles.create(&style("Sensual Lady Style", "sensual-lady", Some(&sensual))).await.unwrap();
    styles.create(&style("Kizomba", "kizomba", None)).await.unwrap();

    styles.delete(&bachata.id).await.unwrap();

    assert_eq!(repo.len().await, 1);
    assert!(styles.get_by_slug("sensual-lady", &TreeQuery::unbounded()).await.is_err());
    assert!(matches!(styles.delete(&bachata.id).await, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_inactive_menu_subtree_is_unreachable() {
    let (repo, menus) = service::<MenuItem>();
    let cours = menus.create(&menu("Cours", "cours", 1, None)).await.unwrap();
    let mut planning = menus.create(&menu("Planning", "planning", 1, Some(&cours))).await.unwrap();
    menus.create(&menu("Semaine", "semaine", 1, Some(&planning))).await.unwrap();
    menus.create(&menu("Inscription", "inscription", 2, Some(&cours))).await.unwrap();
    let mut hidden_root = menus.create(&menu("Boutique", "boutique", 2, None)).await.unwrap();

    planning.deactivate();
    repo.update(&planning).await.unwrap();
    hidden_root.deactivate();
    repo.update(&hidden_root).await.unwrap();

    let roots = menus.list_roots(&TreeQuery::unbounded()).await.unwrap();
    assert_eq!(slugs(&roots), vec!["cours"]);
    let visible: Vec<&str> = roots.iter().flat_map(|t| t.iter()).map(|m| m.slug.as_str()).collect();
    assert_eq!(visible, vec!["cours", "inscription"]);
    assert!(roots.iter().flat_map(|t| t.iter()).all(|m| m.is_active));

    // Neither a hidden item nor an active item below it can be looked up.
    assert!(menus.get_by_slug("planning", &TreeQuery::unbounded()).await.unwrap_err().is_not_found());
    assert!(menus.get_by_slug("semaine", &TreeQuery::unbounded()).await.unwrap_err().is_not_found());
    assert!(menus.get_by_slug("inscription", &TreeQuery::unbounded()).await.is_ok());
}

#[tokio::test]
async fn test_menu_siblings_by_order_then_name() {
    let (_, menus) = service::<MenuItem>();
    let root = menus.create(&menu("Root", "root", 0, None)).await.unwrap();
    for (name, slug, order) in [("Zeta", "zeta", 1), ("Beta", "beta", 2), ("Alpha", "alpha", 2), ("Omega", "omega", 0)] {
        menus.create(&menu(name, slug, order, Some(&root))).await.unwrap();
    }

    let tree = menus.get_by_slug("root", &TreeQuery::unbounded()).await.unwrap();
    assert_eq!(tree.child_slugs(), vec!["omega", "zeta", "alpha", "beta"]);
    let orders: Vec<i32> = tree.children.iter().map(|c| c.node.order).collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_expand_node_count_matches_reachable_rows() {
    let (_, org) = service::<OrganizationNode>();
    let coff = org.create(&node("Capital of Fusion", "coff", None)).await.unwrap();
    let school = org.create(&node("BachataVibe", "bachatavibe", Some(&coff))).await.unwrap();
    for slug in ["cours", "evenements", "boutique"] {
        org.create(&node(slug, slug, Some(&school))).await.unwrap();
    }
    org.create(&node("Elsewhere", "elsewhere", None)).await.unwrap();

    let tree = org.expand_by_id(&coff.id, &TreeQuery::unbounded()).await.unwrap();
    assert_eq!(tree.size(), 5);
    assert_eq!(tree.depth(), 3);

    let shallow = org.expand_by_id(&coff.id, &TreeQuery::with_depth(1)).await.unwrap();
    assert_eq!(shallow.size(), 2);
    assert!(shallow.children[0].children.is_empty());
}

#[tokio::test]
async fn test_cycle_written_around_the_service_is_detected() {
    let (repo, styles) = service::<DanceStyle>();
    let a = styles.create(&style("A", "a", None)).await.unwrap();
    let b = styles.create(&style("B", "b", Some(&a))).await.unwrap();

    // The repository accepts any existing parent; only the service checks ancestry.
    let mut looped = a.clone();
    looped.parent_id = Some(b.id);
    repo.update(&looped).await.unwrap();

    let result = styles.get_by_slug("a", &TreeQuery::unbounded()).await;
    assert!(matches!(result, Err(DomainError::CycleDetected { .. })));
}

#[tokio::test]
async fn test_set_parent_refuses_descendants_and_self() {
    let (_, styles) = service::<DanceStyle>();
    let a = styles.create(&style("A", "a", None)).await.unwrap();
    let b = styles.create(&style("B", "b", Some(&a))).await.unwrap();
    let c = styles.create(&style("C", "c", Some(&b))).await.unwrap();

    assert!(matches!(styles.set_parent(&a.id, Some(c.id)).await, Err(DomainError::InvalidParent(_))));
    assert!(matches!(styles.set_parent(&a.id, Some(a.id)).await, Err(DomainError::InvalidParent(_))));

    let moved = styles.set_parent(&c.id, None).await.unwrap();
    assert!(moved.parent_id.is_none());
    let roots = styles.list_roots(&TreeQuery::unbounded()).await.unwrap();
    assert_eq!(slugs(&roots), vec!["a", "c"]);
}

#[tokio::test]
async fn test_slug_is_unique_across_the_whole_table() {
    let (_, styles) = service::<DanceStyle>();
    let salsa = styles.create(&style("Salsa", "salsa", None)).await.unwrap();
    let kizomba = styles.create(&style("Kizomba", "kizomba", None)).await.unwrap();
    styles.create(&style("Fusion", "fusion", Some(&salsa))).await.unwrap();

    let dup = styles.create(&style("Fusion", "fusion", Some(&kizomba))).await;
    assert!(matches!(dup, Err(DomainError::ConstraintViolation(_))));
}

#[tokio::test]
async fn test_update_or_create_keeps_identity_and_refuses_moves() {
    let (repo, organization) = service::<OrganizationNode>();
    let root = organization.create(&node("Capital of Fusion", "coff", None)).await.unwrap();
    let other = organization.create(&node("Autre école", "autre", None)).await.unwrap();

    let school = node("BachataVibe", "bachatavibe", Some(&root));
    let (first, created) = organization.update_or_create(&school, |_| Ok(())).await.unwrap();
    assert!(created);

    let (second, created) = organization
        .update_or_create(&school, |existing| {
            existing.orbit_radius = 9.5;
            Ok(())
        })
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(repo.find_by_id(&first.id).await.unwrap().unwrap().orbit_radius, 9.5);

    let moved = organization
        .update_or_create(&school, |existing| {
            existing.parent_id = Some(other.id);
            Ok(())
        })
        .await;
    assert!(matches!(moved, Err(DomainError::InvalidParent(_))));
    assert_eq!(repo.find_by_id(&first.id).await.unwrap().unwrap().parent_id, Some(root.id));
}
