use std::io::{BufRead, Write};

use todo_core::{TodoApi, TodoStore};

use crate::view::{self, Intent};

const TITLE: &str = "Todo App";
const PROMPT: &str = "> ";

/// Mounts the store, then reads intents from `input` until `quit` or EOF.
///
/// API failures are reported on `output` and logged; the previous snapshot
/// keeps being shown. Only I/O errors on `input`/`output` end the loop
/// early.
pub fn run<A, R, W>(store: &mut TodoStore<A>, input: R, mut output: W) -> anyhow::Result<()>
where
    A: TodoApi,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{TITLE}")?;
    match store.mount() {
        Ok(()) => write!(output, "{}", view::render_list(store.todos()))?,
        Err(err) => report(&mut output, &err)?,
    }

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        let intent = match view::parse_intent(&line, store.todos()) {
            Ok(Some(intent)) => intent,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        let result = match intent {
            Intent::Create(payload) => store.submit(payload).map(|_| ()),
            Intent::Update(todo) => store.update(&todo),
            Intent::Delete(id) => store.delete(id),
            Intent::Refresh => store.refresh(),
            Intent::Help => {
                writeln!(output, "{}", view::HELP)?;
                continue;
            }
            Intent::Quit => break,
        };

        match result {
            Ok(()) => write!(output, "{}", view::render_list(store.todos()))?,
            Err(err) => report(&mut output, &err)?,
        }
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, err: &todo_core::ApiError) -> std::io::Result<()> {
    tracing::warn!(error = %err, "todo api call failed");
    writeln!(output, "error: {err}")
}
