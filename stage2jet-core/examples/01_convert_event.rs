//! Event Conversion Example
//!
//! Converts one readout window of Stage 2 hardware jets into physical jets
//! and prints the three products.
//!
//! ## What You'll Learn
//!
//! - Building a bunch-crossing window of hardware jets
//! - Configuring the producer from its parameters
//! - Reading the all-jets, central and forward products
//! - What a geometry error looks like
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_convert_event
//! ```

use stage2jet_core::{
    BxCollection, ConversionResult, HardwareJet, JetProducer, ProducerConfig,
};

fn main() -> ConversionResult<()> {
    println!("Stage 2 Jet Conversion Example");
    println!("==============================\n");

    let config = ProducerConfig::new("caloStage2Digis:MP", 0.5)?;
    let producer = JetProducer::from_config(&config)?;
    println!("Source: {}  LSB: {} GeV\n", config.jet_source, config.jet_lsb);

    // Five-crossing readout centred on the triggered crossing
    let mut input = BxCollection::with_range(-2, 2)?;
    input.push(0, HardwareJet::new(120, 5, 10, 1))?;
    input.push(0, HardwareJet::new(64, -17, 40, 1))?;
    input.push(0, HardwareJet::new(30, 24, 5, 0))?;
    input.push(0, HardwareJet::new(22, -31, 71, 0))?;
    input.push(1, HardwareJet::new(18, 29, 1, 0))?;

    let products = producer.produce(&input)?;

    println!("All jets ({}):", products.jets.len());
    for (bx, jet) in products.jets.iter() {
        println!(
            "  bx {:>2}  hw ({:>4}, {:>3}, {:>2})  ->  pt {:>6.1}  eta {:>7.4}  phi {:>6.4}",
            bx,
            jet.hardware().hw_pt,
            jet.hardware().hw_eta,
            jet.hardware().hw_phi,
            jet.pt(),
            jet.eta(),
            jet.phi()
        );
    }

    for label in ["Central", "Forward"] {
        if let Some(particles) = products.by_label(label) {
            println!("\n{} jets ({}):", label, particles.len());
            for (bx, particle) in particles.iter() {
                println!(
                    "  bx {:>2}  pt {:>6.1}  E {:>8.2}",
                    bx,
                    particle.p4.pt(),
                    particle.p4.energy()
                );
            }
        }
    }

    // A tower index outside the map voids the whole event
    input.push(-1, HardwareJet::new(10, 40, 3, 0))?;
    match producer.produce(&input) {
        Ok(_) => println!("\nunexpected success"),
        Err(err) => println!("\nEvent rejected: {}", err),
    }

    Ok(())
}
