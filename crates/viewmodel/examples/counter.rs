//! Counter store driven from the command line.
//!
//! Each argument is an action: `+`, `-`, `reset`, or any other text to set
//! the label.
//!
//! ```sh
//! cargo run -p viewmodel --example counter -- + + hello - reset
//! ```

use viewmodel::{view_model, Cancellables, ObservableObject};

#[view_model(name = "Counter")]
mod counter {
    #[derive(Debug, Default)]
    pub struct State {
        pub count: i64,
        pub label: String,
    }

    pub enum Action {
        Increase,
        Decrease,
        Label(String),
        Reset,
    }

    pub fn reduce(state: &mut State, action: Action) {
        match action {
            Action::Increase => state.count += 1,
            Action::Decrease => state.count -= 1,
            Action::Label(label) => state.label = label,
            Action::Reset => *state = State::default(),
        }
    }
}

fn main() {
    use counter::{Action, Counter};

    let mut store = Counter::new();
    let mut bag = Cancellables::new();

    store
        .observe(|state| println!("count = {:>3}  label = {:?}", state.count, state.label))
        .store_in(&mut bag);

    for arg in std::env::args().skip(1) {
        let action = match arg.as_str() {
            "+" => Action::Increase,
            "-" => Action::Decrease,
            "reset" => Action::Reset,
            _ => Action::Label(arg),
        };
        store.send(action);
    }

    println!("final count: {}", store.lookup(|s| &s.count));
}
