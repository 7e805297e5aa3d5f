use anyhow::Result;

pub mod grammar;

pub trait Command {
    fn run(&self) -> Result<()>;
}
