use hashbrown::HashSet;
use polars::prelude::*;

use crate::data_structs::{
    ChromSizes,
    PosType,
    TaskMap,
    CHROM_COL,
    POS_COL,
};
use crate::error::Result;
use crate::io::read_narrow_peak;

/// One retained peak before ordering: (task index, chrom, pos, right
/// flank edge). The right edge is the deliberate tie-break key of the
/// final ordering.
type PeakRow = (usize, String, PosType, u64);

/// Peak positions for all tasks, filtered to the required chromosomes
/// and to summits whose flanked window stays within chromosome bounds.
///
/// Each task's narrowPeak table contributes its summit positions
/// (`start + summit`); within a task, rows are ordered by
/// `(chrom, pos + flank)` ascending, and tasks are concatenated in the
/// iteration order of `tasks`. Since a task is one strand of an assay,
/// stranded data lists the same intervals under two tasks;
/// `drop_duplicates` collapses those repeated `(chrom, pos)` pairs,
/// keeping the first occurrence.
pub fn peak_positions(
    tasks: &TaskMap,
    chroms: &[String],
    chrom_sizes: &ChromSizes,
    flank: PosType,
    drop_duplicates: bool,
) -> Result<DataFrame> {
    // single growable buffer across tasks; ordered once at the end
    let mut rows: Vec<PeakRow> = Vec::new();

    for (task_index, (name, task)) in tasks.iter().enumerate() {
        let peaks = read_narrow_peak(&task.peaks)?;
        let peaks = peaks
            .lazy()
            .filter(col(CHROM_COL).is_in(lit(Series::new(
                PlSmallStr::from_static(CHROM_COL),
                chroms.to_vec(),
            ))))
            .select([
                col(CHROM_COL),
                (col("start") + col("summit"))
                    .cast(DataType::Int64)
                    .alias(POS_COL),
            ])
            .collect()?;
        log::debug!(
            "task '{}': {} peaks on required chromosomes",
            name,
            peaks.height()
        );

        let chrom_col = peaks.column(CHROM_COL)?.as_materialized_series().str()?;
        let pos_col = peaks.column(POS_COL)?.as_materialized_series().i64()?;

        for (chrom, pos) in chrom_col.into_iter().zip(pos_col.into_iter()) {
            let (Some(chrom), Some(pos)) = (chrom, pos)
            else {
                continue;
            };
            let chrom_size = chrom_sizes.get(chrom)? as i64;
            let flank_left = pos - flank as i64;
            let flank_right = pos + flank as i64;
            if flank_left < 0 || flank_right > chrom_size {
                continue;
            }
            rows.push((
                task_index,
                chrom.to_owned(),
                pos as PosType,
                flank_right as u64,
            ));
        }
    }

    // stable sort reproduces the per-task (chrom, flank_right) ordering
    // while keeping tasks in iteration order
    rows.sort_by(|a, b| {
        (a.0, a.1.as_str(), a.3).cmp(&(b.0, b.1.as_str(), b.3))
    });

    let mut out_chroms: Vec<String> = Vec::with_capacity(rows.len());
    let mut out_positions: Vec<PosType> = Vec::with_capacity(rows.len());
    let mut seen: HashSet<(String, PosType)> = HashSet::new();
    for (_, chrom, pos, _) in rows {
        if drop_duplicates && !seen.insert((chrom.clone(), pos)) {
            continue;
        }
        out_chroms.push(chrom);
        out_positions.push(pos);
    }

    Ok(df!(
        CHROM_COL => out_chroms,
        POS_COL => out_positions,
    )?)
}
