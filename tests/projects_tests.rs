// Host-side tests for the project catalog and its derived views.

use folio_core::{marquee_rows, shuffled, FolioError, Project, ProjectCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn project(id: &str, featured: bool) -> Project {
    Project {
        id: id.to_owned(),
        title: id.to_uppercase(),
        image: format!("/projects/{id}.png"),
        tags: Default::default(),
        link: format!("https://example.com/{id}"),
        featured,
    }
}

fn catalog(n: usize) -> ProjectCatalog {
    ProjectCatalog::new((0..n).map(|i| project(&format!("p{i}"), i % 2 == 0)).collect()).unwrap()
}

#[test]
fn duplicate_ids_are_rejected() {
    let raw = r##"[
        {"id": "a", "title": "A", "image": "/a.png", "link": "#"},
        {"id": "b", "title": "B", "image": "/b.png", "link": "#"},
        {"id": "a", "title": "A again", "image": "/a2.png", "link": "#"}
    ]"##;
    match ProjectCatalog::from_json(raw) {
        Err(FolioError::DuplicateProjectId(id)) => assert_eq!(id, "a"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn malformed_data_is_a_data_error() {
    assert!(matches!(
        ProjectCatalog::from_json("[{\"id\": 3}]"),
        Err(FolioError::ProjectData(_))
    ));
}

#[test]
fn optional_fields_default() {
    let raw = r##"[{"id": "a", "title": "A", "image": "/a.webp", "link": "#"}]"##;
    let catalog = ProjectCatalog::from_json(raw).unwrap();
    let a = catalog.get("a").unwrap();
    assert!(a.tags.is_empty());
    assert!(!a.featured);
    assert!(a.has_image_asset());
}

#[test]
fn image_assets_are_matched_by_extension() {
    let mut p = project("x", false);
    for (image, ok) in [
        ("/x.PNG", true),
        ("/x.jpeg", true),
        ("/x.jpg", true),
        ("/x.webp", true),
        ("/x.gif", false),
        ("/projects/README.md", false),
        ("/projects/", false),
    ] {
        p.image = image.to_owned();
        assert_eq!(p.has_image_asset(), ok, "{image}");
    }
}

#[test]
fn lookups_and_featured() {
    let c = catalog(7);
    assert_eq!(c.len(), 7);
    assert_eq!(c.get("p3").map(|p| p.title.as_str()), Some("P3"));
    assert!(c.get("missing").is_none());
    let featured: Vec<&str> = c.featured().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(featured, ["p0", "p2", "p4", "p6"]);
}

#[test]
fn by_ids_keeps_catalog_order() {
    let c = catalog(7);
    let picked: Vec<&str> = c
        .by_ids(&["p5", "nope", "p1", "p3"])
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(picked, ["p1", "p3", "p5"]);
}

#[test]
fn paging_covers_every_project_once() {
    let c = catalog(7);
    assert_eq!(c.page_count(3), 3);
    assert_eq!(c.page(0, 3).len(), 3);
    assert_eq!(c.page(2, 3).len(), 1);
    assert!(c.page(3, 3).is_empty());
    assert!(c.page(0, 0).is_empty());
    assert_eq!(c.page_count(0), 0);
    let total: usize = (0..c.page_count(3)).map(|i| c.page(i, 3).len()).sum();
    assert_eq!(total, 7);
}

#[test]
fn shuffle_is_a_deterministic_permutation() {
    let c = catalog(10);
    let all: Vec<&Project> = c.all().iter().collect();
    let a = shuffled(&all, &mut StdRng::seed_from_u64(42));
    let b = shuffled(&all, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);

    let mut ids: Vec<&str> = a.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    let mut expected: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test]
fn marquee_rows_split_with_leftovers_in_last_row() {
    let sizes = |n: usize| -> Vec<usize> {
        let items: Vec<usize> = (0..n).collect();
        marquee_rows(&items, 5).iter().map(Vec::len).collect()
    };
    assert!(sizes(0).is_empty());
    assert_eq!(sizes(3), [3]);
    assert_eq!(sizes(5), [5]);
    assert_eq!(sizes(9), [9]);
    assert_eq!(sizes(12), [5, 7]);
    assert_eq!(sizes(15), [5, 5, 5]);
    assert_eq!(sizes(19), [5, 5, 9]);
}

#[test]
fn marquee_rows_preserve_order() {
    let items: Vec<usize> = (0..12).collect();
    let flat: Vec<usize> = marquee_rows(&items, 5).into_iter().flatten().collect();
    assert_eq!(flat, items);
}
