//! Static project catalog.
//!
//! The list is embedded at build time, validated once, and only ever read.
//! Display components derive their own filtered/shuffled/paged views from it.

use crate::error::{FolioError, Result};
use fnv::FnvHashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

static EMBEDDED_PROJECTS: &str = include_str!("../data/projects.json");

const IMAGE_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".webp"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub tags: SmallVec<[String; 4]>,
    pub link: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Whether `image` points at a raster asset rather than a stray repo file.
    pub fn has_image_asset(&self) -> bool {
        let name = self.image.rsplit('/').next().unwrap_or_default();
        let lower = name.to_ascii_lowercase();
        !name.is_empty() && IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

#[derive(Clone, Debug)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(raw)?;
        Self::new(projects)
    }

    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = FnvHashSet::default();
        for p in &projects {
            if !seen.insert(p.id.as_str()) {
                return Err(FolioError::DuplicateProjectId(p.id.clone()));
            }
        }
        log::debug!("[projects] loaded {} entries", projects.len());
        Ok(Self { projects })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_PROJECTS)
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Projects whose id is in `ids`, in catalog order.
    pub fn by_ids(&self, ids: &[&str]) -> Vec<&Project> {
        let wanted: FnvHashSet<&str> = ids.iter().copied().collect();
        self.projects
            .iter()
            .filter(|p| wanted.contains(p.id.as_str()))
            .collect()
    }

    pub fn with_image_assets(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.has_image_asset()).collect()
    }

    pub fn page(&self, index: usize, size: usize) -> &[Project] {
        if size == 0 {
            return &[];
        }
        let start = index.saturating_mul(size).min(self.projects.len());
        let end = start.saturating_add(size).min(self.projects.len());
        &self.projects[start..end]
    }

    pub fn page_count(&self, size: usize) -> usize {
        if size == 0 {
            return 0;
        }
        self.projects.len().div_ceil(size)
    }
}

/// Fisher-Yates shuffle into a new vector.
pub fn shuffled<'a, R: Rng + ?Sized>(projects: &[&'a Project], rng: &mut R) -> Vec<&'a Project> {
    let mut out = projects.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Split `projects` into rows of `min_per_row`, the last row absorbing any
/// leftovers. Fewer than `min_per_row` items still form a single row.
pub fn marquee_rows<T: Clone>(projects: &[T], min_per_row: usize) -> Vec<Vec<T>> {
    if projects.is_empty() {
        return Vec::new();
    }
    let per_row = min_per_row.max(1);
    let row_count = (projects.len() / per_row).max(1);

    let mut rows = Vec::with_capacity(row_count);
    let mut rest = projects;
    for _ in 1..row_count {
        let (head, tail) = rest.split_at(per_row);
        rows.push(head.to_vec());
        rest = tail;
    }
    rows.push(rest.to_vec());
    rows
}
