//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EventRow, SnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(time: f64, infected: u64) -> SnapshotRow {
        SnapshotRow { time, healthy: 42, infected, removed: 0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("snapshots.csv").exists());
        assert!(dir.path().join("events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["time", "healthy", "infected", "removed"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["kind", "time", "agent_id"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&snap_row(0.0, 8)).unwrap();
        w.write_snapshot(&snap_row(1.0, 12)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][2], "8");
        assert_eq!(&rows[1][2], "12");
    }

    #[test]
    fn csv_event_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow { kind: "infection", time: 2.5, agent_id: 17 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "infection");
        assert_eq!(&rows[0][1], "2.5");
        assert_eq!(&rows[0][2], "17");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn integration_csv() {
        use epi_core::EpiConfig;
        use epi_engine::{BaselineInfection, SimBuilder};

        use crate::observer::SimOutputObserver;

        let dir = tmp();
        let cfg = EpiConfig { seed: Some(42), ..Default::default() };
        let mut sim = SimBuilder::new(cfg).build(BaselineInfection).unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run_until_extinct(1.0 / 15.0, 500_000, &mut obs);
        assert!(obs.take_error().is_none());

        // Every logged snapshot and event has a CSV row.
        let mut snaps = csv::Reader::from_path(dir.path().join("snapshots.csv")).unwrap();
        assert_eq!(snaps.records().count(), sim.log().snapshots().len());

        let mut events = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        assert_eq!(events.records().count(), sim.log().events().len());
    }
}
