/// Terminal-driven policy. A dismissed or failed prompt abandons the
/// decision, which the driver turns into a fold.
pub struct Human;

impl Human {
    fn raise(&self, ballot: &Ballot) -> Option<Chips> {
        let ceiling = ballot.balance - ballot.to_call();
        Input::new()
            .with_prompt("Amount ")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<Chips>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Enter a NUMBER"),
                }
            })
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<Chips>().unwrap() > 0 {
                    true => Ok(()),
                    false => Err("Raise must be positive"),
                }
            })
            .validate_with(move |i: &String| -> Result<(), &str> {
                match i.parse::<Chips>().unwrap() <= ceiling {
                    true => Ok(()),
                    false => Err("Raise exceeds your stack"),
                }
            })
            .interact()
            .ok()?
            .parse::<Chips>()
            .ok()
    }
}

impl Policy for Human {
    fn decide(&mut self, ballot: &Ballot) -> Option<Action> {
        let board = ballot
            .community
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        let choices = match ballot.balance > ballot.to_call() {
            true => vec!["Fold", "Call", "Raise"],
            false => vec!["Fold", "Call"],
        };
        let selection = Select::new()
            .with_prompt(format!(
                "\nYOU HOLD {} {} | board [{}] | {} to call | pot {}",
                ballot.hole[0],
                ballot.hole[1],
                board,
                ballot.to_call(),
                ballot.pot,
            ))
            .report(false)
            .items(choices.as_slice())
            .default(1)
            .interact()
            .ok()?;
        match choices[selection] {
            "Fold" => Some(Action::Fold),
            "Call" => Some(Action::Call),
            "Raise" => self.raise(ballot).map(Action::Raise),
            _ => unreachable!(),
        }
    }
}

use super::action::Action;
use super::driver::Ballot;
use super::driver::Policy;
use crate::Chips;
use dialoguer::Input;
use dialoguer::Select;
