use rand::rngs::StdRng;
use rand::SeedableRng;

use bb84_sim::intercept_resend::InterceptResendTrial;
use bb84_sim::trial::Trial;

fn simulate_eavesdropping() {
    println!("BB84 Intercept-Resend Walkthrough");

    let mut rng = StdRng::seed_from_u64(2024);
    let transcript = InterceptResendTrial.generate(16, &mut rng);

    let bits = |v: &[bool]| -> String { v.iter().map(|&b| if b { '1' } else { '0' }).collect() };
    let bases = |v: &[bb84_sim::bb84_states::Basis]| -> String { v.iter().map(|b| b.symbol()).collect() };

    println!("Alice bits:  {}", bits(&transcript.alice_bits));
    println!("Alice bases: {}", bases(&transcript.alice_bases));
    println!("Eve bases:   {}", bases(&transcript.eve_bases));
    println!("Eve bits:    {}", bits(&transcript.eve_bits));
    println!("Bob bases:   {}", bases(&transcript.bob_bases));
    println!("Bob bits:    {}", bits(&transcript.bob_bits));

    let sifted = transcript.sifted_positions();
    println!("Sifted positions: {:?}", sifted);

    match InterceptResendTrial.sample(&transcript) {
        Some(sample) => println!(
            "Errors in sifted key: {}/{} (rate {:.3}, expected 0.25)",
            sample.hits, sample.compared, sample.rate
        ),
        None => println!("No positions survived sifting; run excluded"),
    }
}

fn main() {
    simulate_eavesdropping();
}
