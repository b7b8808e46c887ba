//! Application state for the seatpick shell.
//!
//! `App` composes the core context (registry, engine, mutator, roster) and
//! wraps each operation with its persistence side effects: the roster is
//! written back after picks and roster edits, charts and attendance exports
//! go wherever the period-derived default (or an explicit path) points.
//! File failures are reported and never touch in-memory state.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local};
use tracing::{info, warn};

use seatpick_core::store::{attendance as attendance_file, chart, roster as roster_file};
use seatpick_core::{
    classify, schedule, AssignmentEngine, ChartMutator, Config, Roster, SeatId, SeatRegistry,
    SwapOutcome,
};

use crate::grid;

/// Default roster file name inside the data directory
const ROSTER_FILE: &str = "roster.csv";

pub struct App {
    pub config: Config,
    pub registry: SeatRegistry,
    pub engine: AssignmentEngine,
    pub mutator: ChartMutator,
    pub roster: Roster,
    pub roster_path: PathBuf,
    /// Last chart path used by save/load; picked up as the save default.
    pub chart_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, chart_path: Option<PathBuf>, roster_path: Option<PathBuf>) -> Self {
        let registry = SeatRegistry::new(config.layout.clone());
        let mut engine = AssignmentEngine::new();
        engine.rebuild_seat_pool(&registry);
        let roster_path = roster_path.unwrap_or_else(|| config.data_dir().join(ROSTER_FILE));

        Self {
            config,
            registry,
            engine,
            mutator: ChartMutator::new(),
            roster: Roster::new(),
            roster_path,
            chart_path,
        }
    }

    /// The period in session right now, per the configured bell schedule.
    /// Looked up from the wall clock; used for default filenames and the
    /// startup auto-load.
    pub fn current_period(&self) -> Option<String> {
        let now = Local::now();
        self.config
            .schedule
            .period_at(now.weekday(), now.time())
            .map(str::to_owned)
    }

    /// Load the roster, then the startup chart: an explicitly requested one,
    /// or the current period's chart when it exists on disk. Returns notes
    /// for the shell to print; failures are notes, not fatal.
    pub fn startup_load(&mut self) -> Vec<String> {
        let mut notes = Vec::new();

        if self.roster_path.exists() {
            match roster_file::load(&self.roster_path) {
                Ok(roster) => {
                    info!(count = roster.len(), path = %self.roster_path.display(), "loaded roster");
                    notes.push(format!(
                        "loaded {} students from {}",
                        roster.len(),
                        self.roster_path.display()
                    ));
                    self.roster = roster;
                    self.engine.rebuild_name_pool(&self.roster);
                }
                Err(e) => {
                    warn!(error = %e, path = %self.roster_path.display(), "failed to load roster");
                    notes.push(format!(
                        "warning: could not read {}: {}",
                        self.roster_path.display(),
                        e
                    ));
                }
            }
        }

        let candidate = self.chart_path.take().or_else(|| {
            let period = self.current_period()?;
            let path = self
                .config
                .data_dir()
                .join(schedule::chart_file_name(Some(&period)));
            path.exists().then_some(path)
        });
        if let Some(path) = candidate {
            match self.load_chart(&path) {
                Ok(msg) => notes.push(msg),
                Err(e) => notes.push(format!("warning: {:#}", e)),
            }
        }

        notes
    }

    // =========================================================================
    // Picking
    // =========================================================================

    pub fn pick(&mut self) -> String {
        let pick = self.engine.pick(&self.registry, &mut self.roster);
        let mut msg = format!(
            "{}   (remaining seats: {})",
            pick,
            self.engine.remaining_seats()
        );
        if pick.student.is_some() {
            if let Err(e) = self.persist_roster() {
                warn!(error = %e, "failed to save roster after pick");
                let _ = write!(msg, "\nwarning: roster not saved: {}", e);
            }
        }
        msg
    }

    pub fn show(&self) -> String {
        format!(
            "{}\n\nRemaining seats: {}",
            grid::render(&self.registry, self.mutator.selected()),
            self.engine.remaining_seats()
        )
    }

    // =========================================================================
    // Seat status and labels
    // =========================================================================

    pub fn set_enabled(&mut self, seat: SeatId, enabled: bool) -> Result<String> {
        self.registry.set_enabled(seat, enabled)?;
        self.engine.rebuild_seat_pool(&self.registry);
        let mut msg = format!("{} {}", seat, if enabled { "enabled" } else { "disabled" });
        if enabled && self.registry.has_student(seat) {
            let _ = write!(
                msg,
                "; use 'tardy {}' if {} arrived late",
                seat,
                self.registry.label(seat)
            );
        }
        Ok(msg)
    }

    pub fn set_tardy(&mut self, seat: SeatId, tardy: bool) -> Result<String> {
        self.registry.set_tardy(seat, tardy)?;
        if tardy && !self.registry.is_tardy(seat) {
            return Ok(format!(
                "{} is not an enabled, assigned seat - nothing to mark",
                seat
            ));
        }
        Ok(format!(
            "{} marked {}",
            self.registry.label(seat),
            if tardy { "tardy" } else { "present" }
        ))
    }

    pub fn set_name(&mut self, seat: SeatId, text: &str) -> Result<String> {
        self.registry.set_label(seat, text)?;
        Ok(match self.registry.assigned_name(seat) {
            Some(name) => format!("{} assigned to {}", name, seat),
            None => format!("{} cleared", seat),
        })
    }

    // =========================================================================
    // Chart mutation
    // =========================================================================

    pub fn swap(&mut self, seat: SeatId) -> Result<String> {
        let outcome = self
            .mutator
            .swap_select(&mut self.registry, &mut self.engine, seat)?;
        Ok(match outcome {
            SwapOutcome::Selected(s) => {
                format!("selected {} ({}) - pick a target seat", s, self.registry.label(s))
            }
            SwapOutcome::Deselected => "selection cancelled".to_string(),
            SwapOutcome::Swapped { first, second } => {
                format!("swapped {} and {}", first, second)
            }
            SwapOutcome::Moved { from, to } => format!(
                "moved {} to {}; {} is now empty and disabled",
                self.registry.label(to),
                to,
                from
            ),
            SwapOutcome::Ignored => format!("{} has no student assigned", seat),
        })
    }

    pub fn randomize(&mut self) -> Result<String> {
        self.mutator
            .randomize(&mut self.registry, &mut self.engine)?;
        Ok(format!(
            "chart randomized: {} students reseated",
            self.registry.assigned_names().len()
        ))
    }

    pub fn clear(&mut self) -> String {
        self.mutator.clear(&mut self.registry, &mut self.engine);
        "chart cleared".to_string()
    }

    // =========================================================================
    // Roster
    // =========================================================================

    pub fn add_student(&mut self, name: &str) -> Result<String> {
        if name.trim().is_empty() {
            bail!("usage: add <student>");
        }
        if !self.roster.add(name) {
            bail!("{} is already on the roster", name.trim());
        }
        self.engine.rebuild_name_pool(&self.roster);
        let mut msg = format!("added {} ({} students)", name.trim(), self.roster.len());
        self.note_roster_save_failure(&mut msg);
        Ok(msg)
    }

    pub fn remove_student(&mut self, name: &str) -> Result<String> {
        if !self.roster.remove(name) {
            bail!("{} is not on the roster", name.trim());
        }
        self.engine.rebuild_name_pool(&self.roster);
        let mut msg = format!("removed {} ({} students)", name.trim(), self.roster.len());
        self.note_roster_save_failure(&mut msg);
        Ok(msg)
    }

    pub fn roster_list(&self) -> String {
        if self.roster.is_empty() {
            return "roster is empty - 'add <student>' to start".to_string();
        }
        let mut out = String::new();
        for entry in self.roster.entries() {
            match entry.assigned_seat {
                Some(seat) => {
                    let _ = writeln!(out, "{}  (last seat {})", entry.name, seat);
                }
                None => {
                    let _ = writeln!(out, "{}", entry.name);
                }
            }
        }
        out.trim_end().to_string()
    }

    // =========================================================================
    // Files
    // =========================================================================

    pub fn save_chart(&mut self, path: Option<PathBuf>) -> Result<String> {
        let path = path
            .or_else(|| self.chart_path.clone())
            .unwrap_or_else(|| self.default_chart_path());
        ensure_parent(&path)?;
        chart::save(&self.registry, &path)
            .with_context(|| format!("failed to save chart to {}", path.display()))?;
        self.chart_path = Some(path.clone());
        Ok(format!("chart saved to {}", path.display()))
    }

    pub fn load_chart(&mut self, path: &Path) -> Result<String> {
        chart::load(
            &mut self.registry,
            &mut self.engine,
            &mut self.mutator,
            path,
        )
        .with_context(|| format!("failed to load chart from {}", path.display()))?;
        self.chart_path = Some(path.to_path_buf());
        Ok(format!(
            "chart loaded from {} ({} students seated)",
            path.display(),
            self.registry.assigned_names().len()
        ))
    }

    pub fn export(&mut self, path: Option<PathBuf>) -> Result<String> {
        let report = classify(&self.registry);
        let path = path.unwrap_or_else(|| {
            let period = self.current_period();
            self.config.data_dir().join(schedule::attendance_file_name(
                Local::now().date_naive(),
                period.as_deref(),
            ))
        });
        ensure_parent(&path)?;
        attendance_file::save(&report, &path)
            .with_context(|| format!("failed to export attendance to {}", path.display()))?;
        Ok(format!(
            "attendance exported to {} ({} absent, {} tardy, {} present)",
            path.display(),
            report.absent.len(),
            report.tardy.len(),
            report.present.len()
        ))
    }

    fn default_chart_path(&self) -> PathBuf {
        let period = self.current_period();
        self.config
            .data_dir()
            .join(schedule::chart_file_name(period.as_deref()))
    }

    fn persist_roster(&self) -> seatpick_core::Result<()> {
        if let Some(parent) = self.roster_path.parent() {
            fs::create_dir_all(parent)?;
        }
        roster_file::save(&self.roster, &self.roster_path)
    }

    /// The edit already happened in memory; a save failure is only a note.
    fn note_roster_save_failure(&self, msg: &mut String) {
        if let Err(e) = self.persist_roster() {
            warn!(error = %e, "failed to save roster");
            let _ = write!(msg, " (warning: roster not saved: {})", e);
        }
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
