use vector_wire::{decode_binary, decode_text, encode_binary, encode_text, VectorValue};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Vector Wire Codec Demo");
    println!("=========================\n");

    let embedding = vec![0.25f32, -1.5, 3.0];

    // Text protocol
    println!("📝 Text protocol");
    let literal = encode_text(&VectorValue::from(embedding.clone()), Some(3))?.unwrap();
    println!("  encoded: {}", literal);

    let decoded = decode_text(VectorValue::RawText(literal))?.unwrap();
    println!("  decoded: {:?}", decoded);

    // Binary protocol
    println!("\n📦 Binary protocol");
    let bytes = encode_binary(&VectorValue::from(embedding))?.unwrap();
    let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    println!("  encoded: {}", hex.join(" "));

    let decoded = decode_binary(VectorValue::RawBinary(bytes))?.unwrap();
    println!("  decoded: {:?}", decoded);

    // Bulk form for array-typed columns
    println!("\n🗂  Bulk form");
    let rows = vec![vec![1.0f32, 1.0, 1.0], vec![2.0, 2.0, 2.0]];
    let bulk = encode_text(&VectorValue::from(rows), Some(3))?.unwrap();
    println!("  encoded: {}", bulk);

    // Validation failures surface before anything reaches the wire
    println!("\n🛑 Validation");
    let err = encode_text(&VectorValue::from(vec![1.0f32, 2.0]), Some(3)).unwrap_err();
    println!("  short vector against a 3-wide column: {}", err);

    // Nullable columns pass through untouched
    let absent = encode_text(&VectorValue::from(None::<Vec<f32>>), Some(3))?;
    println!("  NULL column value encodes as: {:?}", absent);

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
