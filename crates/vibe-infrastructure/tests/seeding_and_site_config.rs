// File: tests/seeding_and_site_config.rs

use std::sync::Arc;

use vibe_core::domain::{DanceStyle, MenuItem, OrganizationNode, SiteConfiguration, SITE_CONFIG_KEY};
use vibe_core::repositories::{SiteConfigRepository, TreeRepository};
use vibe_core::services::{CatalogFilter, CatalogService, SeedService, SiteConfigService, TreeService};
use vibe_core::tree::TreeQuery;
use vibe_infrastructure::{InMemoryCatalogRepository, InMemorySiteConfigRepository, InMemoryTreeRepository};

struct Fixture {
    organization: Arc<TreeService<OrganizationNode>>,
    organization_repo: Arc<InMemoryTreeRepository<OrganizationNode>>,
    menu: Arc<TreeService<MenuItem>>,
    styles: Arc<TreeService<DanceStyle>>,
    catalog: Arc<CatalogService>,
    site_config: Arc<SiteConfigService>,
    site_config_repo: Arc<InMemorySiteConfigRepository>,
}

impl Fixture {
    fn new() -> Self {
        let site_config_repo = Arc::new(InMemorySiteConfigRepository::new());
        let organization_repo = Arc::new(InMemoryTreeRepository::<OrganizationNode>::new());
        Self {
            organization: Arc::new(TreeService::new(organization_repo.clone())),
            organization_repo,
            menu: Arc::new(TreeService::new(Arc::new(InMemoryTreeRepository::new()))),
            styles: Arc::new(TreeService::new(Arc::new(InMemoryTreeRepository::new()))),
            catalog: Arc::new(CatalogService::new(Arc::new(InMemoryCatalogRepository::new()))),
            site_config: Arc::new(SiteConfigService::new(site_config_repo.clone())),
            site_config_repo,
        }
    }

    fn seeder(&self) -> SeedService {
        SeedService::new(
            self.organization.clone(),
            self.menu.clone(),
            self.styles.clone(),
            self.catalog.clone(),
            self.site_config.clone(),
        )
    }
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let fixture = Fixture::new();

    let first = fixture.seeder().run().await.unwrap();
    assert!(first.created > 0);
    assert_eq!(first.existing, 0);

    let second = fixture.seeder().run().await.unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.existing, first.total());

    let courses = fixture.catalog.list_courses().await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].schedules.len(), 1);
    let events = fixture.catalog.list_events(&CatalogFilter::default()).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].passes.len(), 2);
    let products = fixture.catalog.list_products(&CatalogFilter::default()).await.unwrap();
    assert_eq!(products.len(), 4);

    assert_eq!(fixture.site_config_repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_seeded_course_and_event_point_at_seeded_rows() {
    let fixture = Fixture::new();
    fixture.seeder().run().await.unwrap();

    let school = fixture.organization.get_by_slug("bachatavibe", &TreeQuery::with_depth(0)).await.unwrap();
    let bachata = fixture.styles.get_by_slug("bachata", &TreeQuery::with_depth(0)).await.unwrap();
    let debutant = fixture.catalog.get_level("debutant").await.unwrap();

    let course = fixture.catalog.get_course("bachata-debutant-lundi").await.unwrap();
    assert_eq!(course.node_id, school.node.id);
    assert_eq!(course.style_id, bachata.node.id);
    assert_eq!(course.level_id, debutant.id);
    assert_eq!(course.schedules[0].day_label(), Some("Lundi"));
    assert_eq!(course.schedules[0].duration_minutes(), 60);

    let event = fixture.catalog.get_event("bachata-vibe-festival-2026").await.unwrap();
    assert_eq!(event.node_id, school.node.id);
    assert!(event.end_date > event.start_date);
    let prices: Vec<i64> = event.passes.iter().map(|p| p.price_cents).collect();
    assert_eq!(prices, vec![8_900, 12_000]);
}

#[tokio::test]
async fn test_reseeding_refreshes_planet_parameters() {
    let fixture = Fixture::new();
    fixture.seeder().run().await.unwrap();

    let mut school = fixture.organization_repo.find_by_slug("bachatavibe").await.unwrap().unwrap();
    let first_id = school.id;
    school.orbit_radius = 42.0;
    school.planet_color = "#000000".to_string();
    school.name = "Renamed by an editor".to_string();
    fixture.organization_repo.update(&school).await.unwrap();

    let report = fixture.seeder().seed_organization().await.unwrap();
    assert_eq!(report.created, 0);

    let refreshed = fixture.organization_repo.find_by_slug("bachatavibe").await.unwrap().unwrap();
    assert_eq!(refreshed.id, first_id);
    assert_eq!(refreshed.orbit_radius, 3.0);
    assert_eq!(refreshed.planet_color, "#7c3aed");
    assert_eq!(refreshed.name, "Renamed by an editor");
    assert_eq!(fixture.organization_repo.len().await, 7);
}

#[tokio::test]
async fn test_seeded_trees_have_expected_shape() {
    let fixture = Fixture::new();
    fixture.seeder().run().await.unwrap();

    let bachata = fixture.styles.get_by_slug("bachata", &TreeQuery::unbounded()).await.unwrap();
    assert_eq!(bachata.child_slugs(), vec!["bachata-moderna", "bachata-sensual"]);

    let org = fixture.organization.list_roots(&TreeQuery::unbounded()).await.unwrap();
    assert_eq!(org.len(), 1);
    assert_eq!(org[0].node.slug, "coff");
    assert_eq!(org[0].child_slugs(), vec!["bachatavibe"]);
    assert_eq!(org[0].children[0].children.len(), 5);

    let menu = fixture.menu.list_roots(&TreeQuery::unbounded()).await.unwrap();
    let orders: Vec<i32> = menu.iter().map(|m| m.node.order).collect();
    assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(menu[0].node.slug, "cours");
    assert!(!menu[0].children.is_empty());

    let levels = fixture.catalog.list_levels().await.unwrap();
    let level_slugs: Vec<&str> = levels.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(level_slugs, vec!["debutant", "intermediaire", "avance"]);
}

#[tokio::test]
async fn test_load_twice_returns_the_same_row() {
    let fixture = Fixture::new();

    let first = fixture.site_config.load().await.unwrap();
    let second = fixture.site_config.load().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.id, SITE_CONFIG_KEY);
    assert_eq!(fixture.site_config_repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_saves_never_add_rows_and_delete_keeps_the_row() {
    let fixture = Fixture::new();
    fixture.site_config.load().await.unwrap();

    for (id, name) in [(7, "Vibe Paris"), (SITE_CONFIG_KEY, "Vibe Lyon"), (-3, "Vibe Nantes")] {
        let config = SiteConfiguration {
            id,
            site_name: name.to_string(),
            ..SiteConfiguration::default()
        };
        let saved = fixture.site_config.save(config).await.unwrap();
        assert_eq!(saved.id, SITE_CONFIG_KEY);
        assert_eq!(fixture.site_config_repo.count().await.unwrap(), 1);
    }

    fixture.site_config.delete().await.unwrap();
    assert_eq!(fixture.site_config_repo.count().await.unwrap(), 1);
    assert_eq!(fixture.site_config.load().await.unwrap().site_name, "Vibe Nantes");
}

#[tokio::test]
async fn test_concurrent_first_load_creates_one_row() {
    let fixture = Fixture::new();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = fixture.site_config.clone();
            tokio::spawn(async move { service.load().await })
        })
        .collect();

    for handle in handles {
        let config = handle.await.unwrap().unwrap();
        assert_eq!(config.id, SITE_CONFIG_KEY);
    }
    assert_eq!(fixture.site_config_repo.count().await.unwrap(), 1);
}
