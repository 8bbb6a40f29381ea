//! Collection Store
//!
//! Single source of truth for the ordered list of saved TopGrids. Every
//! mutation rewrites the whole serialized collection to storage synchronously.

use std::rc::Rc;

use crate::error::{GridError, GridResult};
use crate::models::TopGrid;
use crate::storage::{StorageBackend, COLLECTION_KEY};

/// Owns the in-memory collection and mirrors it to persistent storage
#[derive(Clone)]
pub struct CollectionStore {
    grids: Vec<TopGrid>,
    backend: Rc<dyn StorageBackend>,
}

impl CollectionStore {
    /// Load the collection from storage once, at startup.
    ///
    /// Absent or unparsable data degrades to an empty collection; a fresh
    /// session and a corrupted blob look the same by design.
    pub fn load(backend: Rc<dyn StorageBackend>) -> Self {
        let grids = match backend.read(COLLECTION_KEY) {
            Some(json) => match serde_json::from_str::<Vec<TopGrid>>(&json) {
                Ok(grids) => {
                    log::info!("Loaded {} saved TopGrids", grids.len());
                    grids
                }
                Err(e) => {
                    log::warn!("Stored collection unparsable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => {
                log::info!("No saved TopGrids found, starting fresh");
                Vec::new()
            }
        };
        Self { grids, backend }
    }

    /// All grids, in insertion order
    pub fn grids(&self) -> &[TopGrid] {
        &self.grids
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Grid at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&TopGrid> {
        self.grids.get(index)
    }

    /// Position of the first grid with exactly this title
    pub fn find_index_by_title(&self, title: &str) -> Option<usize> {
        self.grids.iter().position(|g| g.title == title)
    }

    /// True if some grid other than the one at `excluding` carries this title.
    /// Saving a grid over itself under its own title is not a collision.
    pub fn title_exists(&self, title: &str, excluding: Option<usize>) -> bool {
        self.grids
            .iter()
            .enumerate()
            .any(|(i, g)| Some(i) != excluding && g.title == title)
    }

    /// Append (`index` = None) or replace (`index` = Some) a grid, then
    /// persist the whole collection. Returns the slot the grid landed in,
    /// which becomes the caller's selection cursor.
    ///
    /// Rejections (invalid fields, duplicate title) leave the collection
    /// untouched, in memory and in storage.
    pub fn upsert(&mut self, index: Option<usize>, grid: TopGrid) -> GridResult<usize> {
        grid.validate()?;
        if self.title_exists(&grid.title, index) {
            return Err(GridError::DuplicateTitle(grid.title));
        }

        let slot = match index {
            Some(i) => {
                self.grids[i] = grid;
                i
            }
            None => {
                self.grids.push(grid);
                self.grids.len() - 1
            }
        };
        self.persist()?;
        Ok(slot)
    }

    fn persist(&self) -> GridResult<()> {
        let json = serde_json::to_string(&self.grids)
            .map_err(|e| GridError::Storage(e.to_string()))?;
        self.backend.write(COLLECTION_KEY, &json)
    }
}
