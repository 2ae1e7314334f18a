//! Command arguments and their handlers.
//!
//! Argument types carry the clap derives and convert into the core's
//! parameter types with `From`, so `meridian-core` stays free of clap. The
//! [`Cli`] handler runs one command against an [`Explorer`] and renders the
//! resulting panels.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::info;
use meridian_core::{
    display::{DetailPanel, ListPanel, LocalDateTime, OperationStatus},
    params::{ListZones, SelectZone},
    Expansion, Explorer, SnapshotStore, TimeZoneState, ZoneId,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

/// List timezone identifiers
///
/// Zones without a region, such as `EST` or `UTC`, cannot be selected and
/// are hidden unless --all is given.
#[derive(Args, Default)]
pub struct ListZonesArgs {
    /// Only list zones in this region, e.g. Europe
    #[arg(short, long, help = "Only list zones in this region, e.g. Europe")]
    pub region: Option<String>,
    /// Also list zones that cannot be selected
    #[arg(short, long, help = "Also list zones without a region, such as EST")]
    pub all: bool,
}

impl From<ListZonesArgs> for ListZones {
    fn from(val: ListZonesArgs) -> Self {
        ListZones {
            region: val.region,
            include_all: val.all,
        }
    }
}

/// Show the current time in one zone
#[derive(Args)]
pub struct ShowZoneArgs {
    /// Zone identifier, e.g. Europe/London
    #[arg(help = "Zone identifier in Region/City form, e.g. Europe/London")]
    pub zone: String,
}

impl From<ShowZoneArgs> for SelectZone {
    fn from(val: ShowZoneArgs) -> Self {
        SelectZone { zone: val.zone }
    }
}

#[derive(Subcommand, Clone, Copy)]
pub enum StateCommands {
    /// Show the saved snapshot
    #[command(alias = "s")]
    Show,
    /// Delete the saved snapshot
    #[command(aliases = ["rm", "p"])]
    Purge,
}

const BROWSE_HELP: &str = "Type a zone to expand it and again to collapse it. \
                           `list` shows the zones, `quit` exits.";

/// Runs commands against an explorer.
pub struct Cli {
    explorer: Explorer,
    renderer: TerminalRenderer,
    snapshot_file: Option<PathBuf>,
}

impl Cli {
    pub fn new(
        explorer: Explorer,
        renderer: TerminalRenderer,
        snapshot_file: Option<PathBuf>,
    ) -> Self {
        Self {
            explorer,
            renderer,
            snapshot_file,
        }
    }

    fn snapshots(&self) -> Result<SnapshotStore> {
        SnapshotStore::resolve(self.snapshot_file.clone())
            .context("Failed to locate the snapshot file")
    }

    /// Loads the zone list and renders it.
    ///
    /// Fails after rendering when the list could not be loaded.
    pub async fn list_zones(&self, params: &ListZones) -> Result<()> {
        let list = self.explorer.load_zones().await;
        self.renderer.render(&ListPanel::new(&list, params).to_string())?;

        if list.is_error() {
            bail!("Failed to load the zone list");
        }
        Ok(())
    }

    /// Fetches one zone's detail and renders it.
    pub async fn show_zone(&self, params: &SelectZone) -> Result<()> {
        let zone = ZoneId::parse(&params.zone)
            .with_context(|| format!("Cannot show zone '{}'", params.zone))?;
        let detail = self.explorer.select_zone(params).await?;
        self.renderer.render(&DetailPanel::new(&zone, &detail).to_string())?;

        if detail.is_error() {
            bail!("Failed to fetch zone '{zone}'");
        }
        Ok(())
    }

    /// Interactive accordion: each line read from stdin toggles one zone.
    pub async fn browse(&mut self) -> Result<()> {
        let list = self.explorer.load_zones().await;
        let filter = ListZones::default();
        self.renderer.render(&ListPanel::new(&list, &filter).to_string())?;
        self.renderer.render(&OperationStatus::info(BROWSE_HELP).to_string())?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read input")?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, leaving browse");
                    None
                }
            };
            let Some(line) = line else { break };

            match line.trim() {
                "" => continue,
                "quit" | "exit" => break,
                "list" => {
                    let state = self.explorer.state();
                    self.renderer
                        .render(&ListPanel::new(state.list(), &filter).to_string())?;
                }
                zone => self.toggle(zone).await?,
            }
        }
        Ok(())
    }

    async fn toggle(&mut self, zone: &str) -> Result<()> {
        let params = SelectZone {
            zone: zone.to_string(),
        };
        let output = match self.explorer.toggle(&params).await {
            Ok(Expansion::Expanded { zone, detail }) => {
                DetailPanel::new(&zone, &detail).to_string()
            }
            Ok(Expansion::Collapsed(zone)) => {
                OperationStatus::info(format!("Collapsed {zone}")).to_string()
            }
            Err(e) => OperationStatus::failure(e.to_string()).to_string(),
        };
        self.renderer.render(&output)
    }

    pub fn handle_state_command(&self, command: StateCommands) -> Result<()> {
        match command {
            StateCommands::Show => self.show_snapshot(),
            StateCommands::Purge => self.purge_snapshot(),
        }
    }

    fn show_snapshot(&self) -> Result<()> {
        let store = self.snapshots()?;
        let Some(snapshot) = store.load().context("Failed to read the snapshot")? else {
            let message = format!("No snapshot saved at {}", store.path().display());
            return self.renderer.render(&OperationStatus::info(message).to_string());
        };

        let mut output = String::from("# Snapshot\n\n");
        output.push_str(&format!(
            "- **Saved:** {}\n",
            LocalDateTime(&snapshot.saved_at)
        ));
        output.push_str(&format!("- **File:** {}\n", store.path().display()));
        output.push_str(&summarize(&snapshot.state));

        if let Some(detail) = snapshot.state.detail().data() {
            output.push('\n');
            output.push_str(
                &DetailPanel::new(&detail.timezone, snapshot.state.detail()).to_string(),
            );
        }
        self.renderer.render(&output)
    }

    fn purge_snapshot(&self) -> Result<()> {
        let store = self.snapshots()?;
        let status = if store.purge().context("Failed to delete the snapshot")? {
            OperationStatus::success(format!("Deleted snapshot {}", store.path().display()))
        } else {
            OperationStatus::info(format!("No snapshot saved at {}", store.path().display()))
        };
        self.renderer.render(&status.to_string())
    }

    /// Writes the current store state to the snapshot file.
    pub fn save_snapshot(&self) -> Result<()> {
        let store = self.snapshots()?;
        store
            .save(&self.explorer.state())
            .with_context(|| format!("Failed to save snapshot to {}", store.path().display()))?;
        info!("Saved snapshot to {}", store.path().display());
        Ok(())
    }
}

fn summarize(state: &TimeZoneState) -> String {
    let list = state.list();
    let list_line = match (list.error(), list.data()) {
        (Some(error), _) => format!("{} ({error})", list.status()),
        (None, Some(zones)) => format!("{} ({} zones)", list.status(), zones.len()),
        (None, None) => list.status().to_string(),
    };

    let detail = state.detail();
    let detail_line = match (detail.error(), detail.data()) {
        (Some(error), _) => format!("{} ({error})", detail.status()),
        (None, Some(d)) => format!("{} ({})", detail.status(), d.timezone),
        (None, None) => detail.status().to_string(),
    };

    format!("- **Zone list:** {list_line}\n- **Zone detail:** {detail_line}\n")
}
