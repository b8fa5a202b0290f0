use ksuid::KsuidGenerator;

fn main() {
    let generator = KsuidGenerator::new();

    // Generate some IDs
    let id1 = generator.generate();
    let id2 = generator.generate();
    let id3 = generator.generate();

    println!("Generated KSUIDs:");
    for id in [&id1, &id2, &id3] {
        print_id(id);
    }

    // Or work with the raw value
    let raw = generator.next_id();
    println!("\nRaw KSUID {}:", raw);
    println!("  Timestamp offset: {} s since KSUID epoch", raw.timestamp_offset());
    println!("  Unix timestamp: {}", raw.unix_timestamp());
    println!("  Payload: {:02X?}", raw.payload());
}

fn print_id(id: &str) {
    let (timestamp, payload) = ksuid::parse(id).unwrap();
    println!("  ID: {id}, Human date: {timestamp}, Payload: {payload:02X?}");
}
