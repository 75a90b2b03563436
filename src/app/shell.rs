//! Menu loop

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::app::{AppState, InputClosed};
use crate::constants::APP_NAME;
use crate::network::Transport;
use crate::ui::{self, Palette, Role};

const MAIN_MENU: [&str; 5] = [
    "New Request",
    "View Last Request",
    "Generate Code",
    "Help",
    "Exit",
];

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Exit,
}

/// Interactive shell owning the session state
pub struct Shell<R, W, T> {
    pub(super) input: R,
    pub(super) output: W,
    pub(super) transport: T,
    pub(super) palette: Box<dyn Palette>,
    pub(super) state: AppState,
}

impl<R: BufRead, W: Write, T: Transport> Shell<R, W, T> {
    pub fn new(input: R, output: W, transport: T, palette: Box<dyn Palette>) -> Self {
        Shell {
            input,
            output,
            transport,
            palette,
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        let banner = ui::banner(self.palette.as_ref());
        self.emit(&banner)?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is::<InputClosed>() => {
                    info!("Input closed, leaving menu loop");
                    self.emit("\n")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and handle one selection
    fn step(&mut self) -> Result<Flow> {
        let menu = ui::boxed_menu(self.palette.as_ref(), "Main Menu", &MAIN_MENU, Role::Menu);
        self.emit(&menu)?;
        self.emit("\n")?;

        let choice = self.ask("Select option: ")?;
        let choice = choice.trim().parse::<u32>().ok();
        debug!(?choice, "Menu selection");

        match choice {
            Some(1) => self.new_request()?,
            Some(2) => self.view_last_request()?,
            Some(3) => self.generate_code()?,
            Some(4) => {
                let help = ui::help_text(self.palette.as_ref());
                self.emit(&help)?;
            }
            Some(5) => {
                self.emit("\n")?;
                self.say(Role::Success, &format!("[✓] Thanks for using {}!", APP_NAME))?;
                self.emit("\n")?;
                return Ok(Flow::Exit);
            }
            _ => self.say(Role::Error, "[!] Invalid option")?,
        }

        self.pause()?;
        Ok(Flow::Continue)
    }
}
