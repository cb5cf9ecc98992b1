//! Walks a notebook cell by cell and translates it in place.

use crate::cells::{
    COMMENT_MARKER, fences_balanced, translate_code, translate_markdown, translate_markdown_lines,
};
use crate::errors::TranslateError;
use crate::notebook::{Cell, CellType, Notebook};
use crate::translation::{Delay, ResilientTranslator, TranslationProvider};

/// Reported after each cell has been handled.
#[derive(Debug)]
pub struct CellEvent<'a> {
    pub index: usize,
    pub total: usize,
    pub cell: &'a Cell,
    /// `false` for cells that were passed through (raw and unknown types).
    pub translated: bool,
}

/// Translates every cell of `notebook`, in document order.
///
/// Markdown cells are joined and translated as one unit, unless their fences
/// do not pair up, in which case they go line by line. Code cells go line by
/// line. On error the notebook may be partly translated and must not be
/// saved.
pub async fn translate_notebook<P, D, F>(
    notebook: &mut Notebook,
    translator: &ResilientTranslator<P, D>,
    mut on_cell: F,
) -> Result<(), TranslateError>
where
    P: TranslationProvider,
    D: Delay,
    F: FnMut(CellEvent<'_>),
{
    let total = notebook.cells.len();

    for (index, cell) in notebook.cells.iter_mut().enumerate() {
        let translated = match cell.cell_type {
            CellType::Markdown => {
                translate_markdown_cell(cell, translator).await?;
                true
            }
            CellType::Code => {
                translate_code_cell(cell, translator).await?;
                true
            }
            CellType::Raw | CellType::Other(_) => false,
        };

        on_cell(CellEvent {
            index,
            total,
            cell,
            translated,
        });
    }

    Ok(())
}

async fn translate_markdown_cell<P, D>(
    cell: &mut Cell,
    translator: &ResilientTranslator<P, D>,
) -> Result<(), TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    if fences_balanced(&cell.source) {
        let translated = translate_markdown(&cell.text(), translator).await?;
        cell.set_text(&translated);
    } else {
        log::debug!("unbalanced fences, translating markdown cell line by line");
        cell.source = translate_markdown_lines(&cell.source, translator).await?;
    }
    Ok(())
}

async fn translate_code_cell<P, D>(
    cell: &mut Cell,
    translator: &ResilientTranslator<P, D>,
) -> Result<(), TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    for line in &mut cell.source {
        *line = translate_code(line, COMMENT_MARKER, translator).await?;
    }
    Ok(())
}
