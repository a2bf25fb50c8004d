use clap::{Parser, Subcommand};
use serde::Serialize;
use shelter_application::{error::AppError, prelude::*};
use shelter_boundary as json;
use shelter_core::gateways::{
    geocode::GeoCodingGateway, location::LocationProvider, map::MapLauncher,
};
use shelter_entities::{geo::Distance, id::ShelterId, shelter::Shelter};
use std::{
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

#[derive(Debug, Parser)]
#[command(no_binary_name = true, name = "shelters", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum ShellCommand {
    /// Determine the current location
    Locate,
    /// Show own shelters and all predefined shelters nearby
    Nearby,
    /// Show the displayed shelters
    List,
    /// Add a shelter at the location of an address
    AddAddress {
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
    },
    /// Add a shelter at the current location
    AddHere {
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
    },
    /// Ask to delete an own shelter
    Delete { id: ShelterId },
    /// Delete the shelter that awaits confirmation
    Confirm,
    /// Keep the shelter that awaits confirmation
    Cancel,
    /// Open a shelter in the map application
    Map { id: ShelterId },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|l| l.command)
}

/// Line-oriented front end of a [`Session`].
pub struct Shell<G, L, M, W> {
    session: Session<G, L, M>,
    out: W,
    json: bool,
}

impl<G, L, M, W> Shell<G, L, M, W>
where
    G: GeoCodingGateway,
    L: LocationProvider,
    M: MapLauncher,
    W: Write,
{
    pub fn new(session: Session<G, L, M>, out: W, json: bool) -> Self {
        Self { session, out, json }
    }

    pub fn session(&self) -> &Session<G, L, M> {
        &self.session
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if self.execute_line(&line?)?.is_break() {
                break;
            }
        }
        self.out.flush()
    }

    pub fn execute_line(&mut self, line: &str) -> io::Result<ControlFlow<()>> {
        if line.trim().is_empty() {
            return Ok(ControlFlow::Continue(()));
        }
        match parse_line(line) {
            Ok(command) => self.execute(command),
            Err(err) => {
                if self.json {
                    self.write_json(&json::Error {
                        message: err.to_string().trim_end().to_string(),
                    })?;
                } else {
                    write!(self.out, "{err}")?;
                }
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> io::Result<ControlFlow<()>> {
        log::debug!("Executing {command:?}");
        match command {
            ShellCommand::Locate => match self.session.locate() {
                Ok(pos) => {
                    if self.json {
                        self.write_json(&json::Coordinate::from(pos))?;
                    } else {
                        writeln!(self.out, "Located at {pos}")?;
                    }
                }
                Err(err) => self.write_error(&err)?,
            },
            ShellCommand::Nearby => match self.session.find_nearby() {
                Ok(count) => {
                    if !self.json {
                        writeln!(self.out, "Found {count} shelters")?;
                    }
                    self.write_displayed_shelters()?;
                }
                Err(err) => self.write_error(&err)?,
            },
            ShellCommand::List => self.write_displayed_shelters()?,
            ShellCommand::AddAddress { address, name } => {
                let res = self
                    .session
                    .add_by_address(&address.join(" "), &name.join(" "));
                self.write_added_shelter(res)?;
            }
            ShellCommand::AddHere { name } => {
                let res = self.session.add_current_location(&name.join(" "));
                self.write_added_shelter(res)?;
            }
            ShellCommand::Delete { id } => {
                if self.session.request_delete(id) {
                    if !self.json {
                        writeln!(
                            self.out,
                            "Delete shelter {id}? Type 'confirm' or 'cancel'."
                        )?;
                    }
                } else if !self.json {
                    writeln!(self.out, "No shelter awaits deletion")?;
                }
                if self.json {
                    self.write_json(&self.snapshot())?;
                }
            }
            ShellCommand::Confirm => {
                let deleted = self.session.confirm_delete();
                if self.json {
                    self.write_json(&self.snapshot())?;
                } else if let Some(id) = deleted {
                    writeln!(self.out, "Deleted shelter {id}")?;
                } else {
                    writeln!(self.out, "Nothing has been deleted")?;
                }
            }
            ShellCommand::Cancel => {
                self.session.cancel_delete();
                if self.json {
                    self.write_json(&self.snapshot())?;
                } else {
                    writeln!(self.out, "Nothing will be deleted")?;
                }
            }
            ShellCommand::Map { id } => match self.session.open_in_map(id) {
                Ok(()) => {
                    if !self.json {
                        writeln!(self.out, "Opened shelter {id} in the map")?;
                    }
                }
                Err(err) => self.write_error(&err)?,
            },
            ShellCommand::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn shelter_to_json(&self, shelter: &Shelter) -> json::Shelter {
        let mut dto = json::Shelter::from(shelter.clone());
        dto.distance_miles = self.session.distance_to(shelter).map(Distance::to_miles);
        dto
    }

    fn snapshot(&self) -> json::SessionSnapshot {
        json::SessionSnapshot {
            state: match self.session.state() {
                SessionState::Uninitialized => json::SessionState::Uninitialized,
                SessionState::Located => json::SessionState::Located,
            },
            reference_location: self.session.reference_location().map(Into::into),
            displayed_shelters: self
                .session
                .displayed_shelters()
                .iter()
                .map(|s| self.shelter_to_json(s))
                .collect(),
            pending_delete_id: self.session.pending_delete_id().map(Into::into),
        }
    }

    fn write_displayed_shelters(&mut self) -> io::Result<()> {
        if self.json {
            return self.write_json(&self.snapshot());
        }
        for shelter in self.session.displayed_shelters() {
            let distance = self
                .session
                .distance_to(shelter)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                self.out,
                "{:>5}  {:<10}  {:>9}  {}",
                shelter.id, shelter.origin, distance, shelter.name
            )?;
        }
        Ok(())
    }

    fn write_added_shelter(&mut self, res: shelter_application::Result<Shelter>) -> io::Result<()> {
        match res {
            Ok(shelter) => {
                if self.json {
                    self.write_json(&self.shelter_to_json(&shelter))
                } else {
                    writeln!(
                        self.out,
                        "Added shelter {} '{}' at {}",
                        shelter.id, shelter.name, shelter.pos
                    )
                }
            }
            Err(err) => self.write_error(&err),
        }
    }

    fn write_error(&mut self, err: &AppError) -> io::Result<()> {
        if self.json {
            self.write_json(&json::Error {
                message: err.to_string(),
            })
        } else {
            writeln!(self.out, "error: {err}")
        }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}
