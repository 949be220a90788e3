use std::{
    collections::HashMap,
    fs::File,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{
    Line, NetworkError, NetworkSnapshotStore, Segment, SegmentPenalty, TransitNetwork, Vehicle,
};

pub const LINES_FILENAME: &str = "lines.csv";
pub const SEGMENTS_FILENAME: &str = "segments.csv";
pub const PENALTIES_FILENAME: &str = "segment_penalties.csv";

/// snapshot store backed by a directory of CSV files, one sub-directory per time period:
///
/// ```text
/// {root}/{period}/lines.csv
/// {root}/{period}/segments.csv
/// {root}/{period}/segment_penalties.csv   (written)
/// ```
#[derive(Debug, Clone)]
pub struct CsvSnapshotStore {
    root: PathBuf,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct LineRow {
    line_id: String,
    mode: char,
    source_mode: Option<char>,
    headway: f64,
    seated_capacity: f64,
    total_capacity: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct SegmentRow {
    line_id: String,
    segment_index: usize,
    transit_volume: f64,
    transit_boardings: f64,
    previous_headway: f64,
}

impl CsvSnapshotStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn period_directory(&self, time_period: &str) -> PathBuf {
        self.root.join(time_period)
    }

    /// writes a full network snapshot for a period, creating the period directory.
    pub fn write_network(
        &self,
        time_period: &str,
        network: &TransitNetwork,
    ) -> Result<(), NetworkError> {
        let dir = self.period_directory(time_period);
        std::fs::create_dir_all(&dir).map_err(|e| NetworkError::Write {
            path: dir.clone(),
            message: format!("unable to create period directory: {e}"),
        })?;
        let line_rows = network.lines.iter().map(|line| LineRow {
            line_id: line.id.clone(),
            mode: line.mode,
            source_mode: line.source_mode,
            headway: line.headway,
            seated_capacity: line.vehicle.seated_capacity,
            total_capacity: line.vehicle.total_capacity,
        });
        write_rows(&dir.join(LINES_FILENAME), line_rows)?;
        let segment_rows = network.lines.iter().flat_map(|line| {
            line.segments
                .iter()
                .enumerate()
                .map(|(segment_index, seg)| SegmentRow {
                    line_id: line.id.clone(),
                    segment_index,
                    transit_volume: seg.transit_volume,
                    transit_boardings: seg.transit_boardings,
                    previous_headway: seg.previous_headway,
                })
        });
        write_rows(&dir.join(SEGMENTS_FILENAME), segment_rows)
    }

    /// reads back penalties written by [`NetworkSnapshotStore::write_penalties`].
    pub fn read_penalties(&self, time_period: &str) -> Result<Vec<SegmentPenalty>, NetworkError> {
        read_rows(&self.period_directory(time_period).join(PENALTIES_FILENAME))
    }
}

impl NetworkSnapshotStore for CsvSnapshotStore {
    fn read_network(&self, time_period: &str) -> Result<TransitNetwork, NetworkError> {
        let dir = self.period_directory(time_period);
        if !dir.is_dir() {
            return Err(NetworkError::MissingPeriod(time_period.to_string()));
        }
        let line_rows: Vec<LineRow> = read_rows(&dir.join(LINES_FILENAME))?;
        let segment_rows: Vec<SegmentRow> = read_rows(&dir.join(SEGMENTS_FILENAME))?;
        log::debug!(
            "{} - loaded {} line rows and {} segment rows",
            dir.to_string_lossy(),
            line_rows.len(),
            segment_rows.len()
        );
        build_network(line_rows, segment_rows)
    }

    fn write_penalties(
        &mut self,
        time_period: &str,
        penalties: &[SegmentPenalty],
    ) -> Result<(), NetworkError> {
        let filepath = self.period_directory(time_period).join(PENALTIES_FILENAME);
        write_rows(&filepath, penalties.iter())?;
        log::info!(
            "wrote {} segment penalties to {}",
            penalties.len(),
            filepath.to_string_lossy()
        );
        Ok(())
    }
}

/// attaches segment rows to their lines, keeping the line order of the lines file and
/// requiring dense segment indices 0..n within each line.
fn build_network(
    line_rows: Vec<LineRow>,
    segment_rows: Vec<SegmentRow>,
) -> Result<TransitNetwork, NetworkError> {
    let mut segments_by_line: HashMap<String, Vec<(usize, Segment)>> = line_rows
        .iter()
        .map(|row| (row.line_id.clone(), vec![]))
        .collect();
    for row in segment_rows.into_iter() {
        let entry = segments_by_line
            .get_mut(&row.line_id)
            .ok_or_else(|| NetworkError::UnknownLine(row.line_id.clone()))?;
        entry.push((
            row.segment_index,
            Segment::new(
                row.transit_volume,
                row.transit_boardings,
                row.previous_headway,
            ),
        ));
    }

    let lines = line_rows
        .into_iter()
        .map(|row| {
            let mut indexed = segments_by_line.remove(&row.line_id).unwrap_or_default();
            indexed.sort_by_key(|(idx, _)| *idx);
            for (expected, (found, _)) in indexed.iter().enumerate() {
                if expected != *found {
                    return Err(NetworkError::NonContiguousSegments {
                        line_id: row.line_id.clone(),
                        expected,
                        found: *found,
                    });
                }
            }
            Ok(Line {
                id: row.line_id,
                mode: row.mode,
                source_mode: row.source_mode,
                headway: row.headway,
                vehicle: Vehicle {
                    seated_capacity: row.seated_capacity,
                    total_capacity: row.total_capacity,
                },
                segments: indexed.into_iter().map(|(_, seg)| seg).collect(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    TransitNetwork::new(lines)
}

fn read_rows<T: DeserializeOwned>(filepath: &Path) -> Result<Vec<T>, NetworkError> {
    let mut reader = csv::Reader::from_path(filepath).map_err(|e| NetworkError::Read {
        path: filepath.to_path_buf(),
        message: e.to_string(),
    })?;
    reader
        .deserialize()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|e| NetworkError::Read {
                path: filepath.to_path_buf(),
                message: format!("row {idx}: {e}"),
            })
        })
        .collect()
}

fn write_rows<I>(filepath: &Path, rows: I) -> Result<(), NetworkError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let file = File::create(filepath).map_err(|e| NetworkError::Write {
        path: filepath.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer.serialize(row).map_err(|e| NetworkError::Write {
            path: filepath.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| NetworkError::Write {
        path: filepath.to_path_buf(),
        message: format!("failed to flush: {e}"),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn network() -> TransitNetwork {
        TransitNetwork::new(vec![
            Line {
                id: String::from("BART_R"),
                mode: 'h',
                source_mode: Some('h'),
                headway: 15.0,
                vehicle: Vehicle {
                    seated_capacity: 60.0,
                    total_capacity: 120.0,
                },
                segments: vec![
                    Segment::new(30.0, 30.0, 15.0),
                    Segment::new(45.0, 20.0, 16.5),
                    Segment::new(0.0, 0.0, 15.0),
                ],
            },
            Line {
                id: String::from("MUNI_38"),
                mode: 'b',
                source_mode: None,
                headway: 6.0,
                vehicle: Vehicle {
                    seated_capacity: 35.0,
                    total_capacity: 70.0,
                },
                segments: vec![Segment::new(12.0, 12.0, 6.0), Segment::new(0.0, 0.0, 6.0)],
            },
        ])
        .expect("test invariant failed")
    }

    #[test]
    fn test_network_written_then_read() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let mut store = CsvSnapshotStore::new(dir.path());
        let expected = network();
        store
            .write_network("am", &expected)
            .expect("failed writing network");
        let found = store.read_network("am").expect("failed reading network");
        assert_eq!(found, expected);

        let penalties = vec![SegmentPenalty {
            line_id: String::from("MUNI_38"),
            segment_index: 0,
            eawt: 0.25,
            capacity_penalty: 0.0,
        }];
        store
            .write_penalties("am", &penalties)
            .expect("failed writing penalties");
        let read_back = store.read_penalties("am").expect("failed reading penalties");
        assert_eq!(read_back, penalties);
    }

    #[test]
    fn test_missing_period() {
        let dir = tempfile::tempdir().expect("test invariant failed");
        let store = CsvSnapshotStore::new(dir.path());
        let result = store.read_network("pm");
        assert!(matches!(result, Err(NetworkError::MissingPeriod(p)) if p == "pm"));
    }

    #[test]
    fn test_segment_gap_rejected() {
        let lines = vec![LineRow {
            line_id: String::from("x"),
            mode: 'b',
            source_mode: None,
            headway: 10.0,
            seated_capacity: 1.0,
            total_capacity: 2.0,
        }];
        let segments = [0usize, 2]
            .iter()
            .map(|idx| SegmentRow {
                line_id: String::from("x"),
                segment_index: *idx,
                transit_volume: 0.0,
                transit_boardings: 0.0,
                previous_headway: 10.0,
            })
            .collect();
        let result = build_network(lines, segments);
        assert!(matches!(
            result,
            Err(NetworkError::NonContiguousSegments {
                expected: 1,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_line_rejected() {
        let segments = vec![SegmentRow {
            line_id: String::from("ghost"),
            segment_index: 0,
            transit_volume: 0.0,
            transit_boardings: 0.0,
            previous_headway: 10.0,
        }];
        let result = build_network(vec![], segments);
        assert!(matches!(result, Err(NetworkError::UnknownLine(id)) if id == "ghost"));
    }
}
