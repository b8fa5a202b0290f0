use ksuid::{Ksuid, KsuidError};

fn main() {
    let inputs = [
        "0ujtsYcgvSTl8PAuAdqWYSMnLOv",
        "000000000000000000000000000",
        "aWgEPTl1tmebfsQzFP4bxwgy80V",
        "zzzzzzzzzzzzzzzzzzzzzzzzzzz",
        "not-a-ksuid",
    ];

    for input in inputs {
        match input.parse::<Ksuid>() {
            Ok(id) => inspect(input, id),
            Err(KsuidError::ValueTooLarge { len }) => {
                println!("{input}: too large ({len} bytes)\n");
            }
            Err(err) => println!("{input}: {err}\n"),
        }
    }
}

fn inspect(input: &str, id: Ksuid) {
    println!("REPRESENTATION:");
    println!("  String: {input}");
    let raw: String = id.as_bytes().iter().map(|b| format!("{b:02X}")).collect();
    println!("     Raw: {raw}");
    println!("COMPONENTS:");
    match id.timestamp() {
        Ok(time) => println!("       Time: {time}"),
        Err(err) => println!("       Time: {err}"),
    }
    println!("  Timestamp: {}", id.timestamp_offset());
    let payload: String = id.payload().iter().map(|b| format!("{b:02X}")).collect();
    println!("    Payload: {payload}\n");
}
