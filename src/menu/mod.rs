pub mod prompt;

pub use prompt::Console;

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

use crate::output::{format_participant_list, format_performance_list, format_results};
use crate::scoring::{parse_score, parse_selection, rank_performances, RankedResult, DEFAULT_TOP_COUNT};
use crate::store::{save_festival_data, FestivalData};

const MENU_TITLE: &str = "Festival of Amateur Performing Arts";
const MENU_ITEMS: [&str; 5] = [
    "1. Add participant",
    "2. Add performance",
    "3. Add score",
    "4. Show results",
    "5. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    AddParticipant,
    AddPerformance,
    AddScore,
    ShowResults,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddParticipant),
            "2" => Some(MenuChoice::AddPerformance),
            "3" => Some(MenuChoice::AddScore),
            "4" => Some(MenuChoice::ShowResults),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// State owned by the menu loop: the festival records and where they live
pub struct Session {
    pub data: FestivalData,
    pub data_path: PathBuf,
    pub top_count: usize,
    pub use_colors: bool,
}

impl Session {
    pub fn new(data: FestivalData, data_path: PathBuf) -> Self {
        Self {
            data,
            data_path,
            top_count: DEFAULT_TOP_COUNT,
            use_colors: false,
        }
    }

    /// Ranked summary of the current records
    pub fn results(&self) -> Vec<RankedResult> {
        rank_performances(&self.data, self.top_count)
    }

    /// Write the data file; failures are reported and the session carries on
    fn persist<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<bool> {
        match save_festival_data(&self.data_path, &self.data) {
            Ok(()) => Ok(true),
            Err(e) => {
                error!("Failed to save data: {:#}", e);
                console.say(format!("Failed to save data: {:#}", e))?;
                Ok(false)
            }
        }
    }
}

/// Run the numbered menu until the user exits or input ends
///
/// Bad input never ends the loop; only choice 5 or end of input does.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        console.say("")?;
        console.say(MENU_TITLE)?;
        for item in MENU_ITEMS {
            console.say(item)?;
        }

        let Some(choice) = console.prompt("Choose an action: ")? else {
            debug!("Input closed, leaving menu");
            console.say("")?;
            return Ok(());
        };

        let flow = match MenuChoice::parse(&choice) {
            Some(MenuChoice::AddParticipant) => add_participant(session, console)?,
            Some(MenuChoice::AddPerformance) => add_performance(session, console)?,
            Some(MenuChoice::AddScore) => add_score(session, console)?,
            Some(MenuChoice::ShowResults) => show_results(session, console)?,
            Some(MenuChoice::Exit) => {
                console.say("Goodbye!")?;
                Flow::Quit
            }
            None => {
                console.say("Invalid choice!")?;
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn add_participant<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    let Some(name) = console.prompt("Participant full name: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(group) = console.prompt("Group (course/faculty): ")? else {
        return Ok(Flow::Quit);
    };

    let index = session.data.add_participant(name.clone(), group);
    info!("Added participant #{}: {}", index + 1, name);

    if session.persist(console)? {
        console.say(format!("Participant {} added!", name))?;
    }
    Ok(Flow::Continue)
}

fn add_performance<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    if session.data.participants.is_empty() {
        console.say("No participants yet! Add some first.")?;
        return Ok(Flow::Continue);
    }

    console.say("")?;
    console.say("Participants:")?;
    console.say(format_participant_list(
        &session.data.participants,
        session.use_colors,
    ))?;
    console.say("")?;

    let Some(input) = console.prompt("Choose participant number: ")? else {
        return Ok(Flow::Quit);
    };
    let participant_id = match parse_selection(&input, session.data.participants.len()) {
        Ok(id) => id,
        Err(e) => {
            debug!("Rejected participant selection: {}", e);
            console.say(format!("Invalid participant number: {}!", e))?;
            return Ok(Flow::Continue);
        }
    };

    let Some(title) = console.prompt("Performance title: ")? else {
        return Ok(Flow::Quit);
    };

    match session.data.add_performance(participant_id, title) {
        Ok(index) => {
            info!("Added performance #{} for participant #{}", index + 1, participant_id + 1);
            if session.persist(console)? {
                console.say("Performance added!")?;
            }
        }
        Err(e) => console.say(format!("Could not add performance: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn add_score<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    if session.data.performances.is_empty() {
        console.say("No performances yet! Add one first.")?;
        return Ok(Flow::Continue);
    }

    console.say("")?;
    console.say("Performances:")?;
    console.say(format_performance_list(&session.data, session.use_colors))?;
    console.say("")?;

    let Some(input) = console.prompt("Choose performance number: ")? else {
        return Ok(Flow::Quit);
    };
    let performance_id = match parse_selection(&input, session.data.performances.len()) {
        Ok(id) => id,
        Err(e) => {
            debug!("Rejected performance selection: {}", e);
            console.say(format!("Invalid performance number: {}!", e))?;
            return Ok(Flow::Continue);
        }
    };

    let Some(input) = console.prompt("Score (1-10): ")? else {
        return Ok(Flow::Quit);
    };
    let score = match parse_score(&input) {
        Ok(score) => score,
        Err(e) => {
            debug!("Rejected score: {}", e);
            console.say("Score must be a number between 1 and 10!")?;
            return Ok(Flow::Continue);
        }
    };

    match session.data.add_score(performance_id, score) {
        Ok(_) => {
            info!("Scored performance #{}: {}", performance_id + 1, score);
            if session.persist(console)? {
                console.say("Score added!")?;
            }
        }
        Err(e) => console.say(format!("Could not add score: {}", e))?,
    }
    Ok(Flow::Continue)
}

fn show_results<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> Result<Flow> {
    if session.data.scores.is_empty() {
        console.say("No scores recorded yet!")?;
        return Ok(Flow::Continue);
    }

    let results = session.results();
    console.say("")?;
    console.say(format_results(&results, session.top_count, session.use_colors))?;
    Ok(Flow::Continue)
}
