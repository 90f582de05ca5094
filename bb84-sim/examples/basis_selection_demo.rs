use bb84_sim::agreement::BasisAgreementTrial;
use bb84_sim::trial::Trial;

fn basis_selection_demo() {
    println!("BB84 Basis Selection Demonstration");

    let mut rng = rand::thread_rng();
    let transcript = BasisAgreementTrial.generate(10, &mut rng);

    let alice: String = transcript.alice_bases.iter().map(|b| b.symbol()).collect();
    let bob: String = transcript.bob_bases.iter().map(|b| b.symbol()).collect();
    println!("Alice's bases: {}", alice);
    println!("Bob's bases:   {}", bob);
    println!("Agreement:     {}", transcript.agreement_string());
    println!("Number of matching bases: {}", transcript.matches());
}

fn main() {
    basis_selection_demo();
}
