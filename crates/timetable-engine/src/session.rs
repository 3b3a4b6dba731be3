//! Select sources, then export the timetable they produce.
//!
//! Selecting sources resets the registry and admits the files afresh.
//! Exporting drains the registry into a grid; if a previous export already
//! drained it, the registry is cleared and the selected sources are admitted
//! again first, so repeated exports of the same selection produce the same
//! document. Off-grid slots left behind by a drain do not count as a loaded
//! registry.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::admission::AdmissionPolicy;
use crate::error::Result;
use crate::grid::Grid;
use crate::render::Renderer;
use crate::timetable::{LoadReport, Timetable};

#[derive(Debug, Default)]
pub struct Session {
    sources: Vec<PathBuf>,
    timetable: Timetable,
    /// Set once `assemble` has drained the registry since the last `select`.
    drained: bool,
}

impl Session {
    pub fn new(policy: AdmissionPolicy) -> Self {
        Self {
            sources: Vec::new(),
            timetable: Timetable::with_policy(policy),
            drained: false,
        }
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Replace the selected sources and admit them into an empty registry.
    pub fn select<P: AsRef<Path>>(&mut self, sources: &[P]) -> LoadReport {
        self.sources = sources.iter().map(|p| p.as_ref().to_path_buf()).collect();
        self.timetable.clear();
        self.drained = false;
        self.timetable.load(&self.sources)
    }

    /// Assemble the grid, reloading the selection if an earlier assembly
    /// drained the registry or it is empty.
    pub fn assemble(&mut self) -> Grid {
        if (self.drained || self.timetable.is_empty()) && !self.sources.is_empty() {
            debug!(sources = self.sources.len(), "registry drained, reloading sources");
            self.timetable.clear();
            self.timetable.load(&self.sources);
        }
        self.drained = true;
        self.timetable.assemble()
    }

    /// Assemble and render to a string.
    pub fn export(&mut self, renderer: &dyn Renderer) -> Result<String> {
        let grid = self.assemble();
        renderer.render(&grid)
    }

    /// Assemble, render, and write to `path`, creating parent directories.
    pub fn export_to(&mut self, renderer: &dyn Renderer, path: &Path) -> Result<()> {
        let document = self.export(renderer)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, document)?;
        info!(format = %renderer.format(), path = %path.display(), "timetable written");
        Ok(())
    }
}
