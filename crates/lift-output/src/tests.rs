//! Integration tests for lift-output.

use lift_core::{Floor, SimConfig, Tick};
use lift_dispatch::FifoDispatch;
use lift_sim::{Arrival, ScriptedSpawner, SimBuilder};

fn test_config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
    SimConfig {
        num_floors:        10,
        car_count:         1,
        total_ticks,
        seed:              42,
        spawn_probability: 0.0,
        ticks_per_floor:   1,
        output_interval_ticks,
    }
}

fn one_trip() -> ScriptedSpawner {
    [(Tick(0), Arrival::new(Floor(3), Floor(7)))].into_iter().collect()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DispatchRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn dispatch_row(tick: u64, target_floor: u32) -> DispatchRow {
        DispatchRow { tick, car_id: 0, from_floor: 0, target_floor, passengers: 0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("dispatches.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("dispatches.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "car_id", "from_floor", "target_floor", "passengers"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "waiting", "riding", "delivered", "pending_calls"]);
    }

    #[test]
    fn csv_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_dispatch(&dispatch_row(0, 7)).unwrap();
        w.write_dispatch(&dispatch_row(5, 3)).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 0, waiting: 2, riding: 1, delivered: 0, pending_calls: 2,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("dispatches.csv")).unwrap();
        let targets: Vec<String> = rdr
            .records()
            .map(|r| r.unwrap()[3].to_owned())
            .collect();
        assert_eq!(targets, ["7", "3"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let row = rdr2.records().next().unwrap().unwrap();
        assert_eq!(&row[1], "2");
        assert_eq!(&row[4], "2");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::row::{DispatchRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputResult, SimOutputObserver};

    /// In-memory writer that records rows.
    #[derive(Default)]
    struct MemWriter {
        dispatches: Vec<DispatchRow>,
        summaries:  Vec<TickSummaryRow>,
        finished:   usize,
    }

    impl OutputWriter for MemWriter {
        fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
            self.dispatches.push(*row);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn records_every_dispatch() {
        let config = test_config(8, 1);
        let mut sim = SimBuilder::new(config.clone(), FifoDispatch)
            .spawner(one_trip())
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default(), &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(
            w.dispatches,
            vec![
                DispatchRow { tick: 0, car_id: 0, from_floor: 0, target_floor: 3, passengers: 0 },
                DispatchRow { tick: 3, car_id: 0, from_floor: 3, target_floor: 7, passengers: 1 },
            ]
        );
        assert_eq!(w.summaries.len(), 8);
        assert_eq!(w.summaries[7].delivered, 1);
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn summary_interval_respected() {
        let config = test_config(10, 4);
        let mut sim = SimBuilder::new(config.clone(), FifoDispatch).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default(), &config);
        sim.run(&mut obs).unwrap();

        let ticks: Vec<u64> = obs.into_writer().summaries.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 4, 8]);
    }

    #[test]
    fn zero_interval_writes_no_summaries() {
        let config = test_config(5, 0);
        let mut sim = SimBuilder::new(config.clone(), FifoDispatch).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default(), &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.into_writer().summaries.is_empty());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(8, 1);
        let mut sim = SimBuilder::new(config.clone(), FifoDispatch)
            .spawner(one_trip())
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("dispatches.csv")).unwrap();
        assert_eq!(rdr.records().count(), 2);
        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 8);
    }
}
