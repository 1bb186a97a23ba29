//! Snapshot of the serialized text format.

use motion_table::Table;

#[test]
fn serialized_recording_snapshot() {
    let lines = [
        "time,accelX,accelY,accelZ",
        "1000.5,0.01,-0.02,9.81#",
        "1000.75,0.015,-0.018,9.79#",
        "1001.25,0.1,0.25,9.8#",
    ];
    let names = lines[0].split(',').map(String::from).collect();
    let table = Table::from_lines(&lines, names, 1).unwrap();

    insta::assert_snapshot!("serialized_recording", table.to_csv_string());
}
