use unicycle_kinematics::*;

fn main() {
    let epsilon = 1e-6;
    let model_result = UnicycleModel::with_epsilon(epsilon);

    let mut current_state = State::new(0.0, 0.0, 0.0);
    let control = ControlInput::new(1.0, 0.5); // 1.0 m/s forward, 0.5 rad/s turning left
    let dt = 0.1; // Time step in seconds
    let num_steps = 20;

    match model_result {
        Ok(model) => {
            println!("Initializing simulation...");
            println!("  Model:            {}", model);
            println!("  Initial State:    {:?}", current_state);
            println!("  Control Input:    {:?}", control);
            if let Some(radius) = model.turn_radius(&control) {
                println!("  Turn Radius:      {} m", radius);
            }
            println!("  Time Step:        {} s", dt);
            println!("  Num Steps:        {}", num_steps);
            println!("\nSimulating...");

            for i in 0..num_steps {
                current_state = model.next_state(&current_state, &control, dt);
                println!("Step {:>2}: State: {}", i + 1, current_state);
            }

            // Raw control sequences are checked before use.
            match model.next_state_from_slice(&current_state, &[1.0, 0.5, 0.0], dt) {
                Ok(state) => println!("Unexpected success: {}", state),
                Err(e) => println!("\nRejected malformed control: {}", e),
            }

            println!("\nSimulation complete.");
            println!("Final State: {:?}", current_state);
        }
        Err(e) => {
            eprintln!("Failed to initialize model: {:?}", e);
            eprintln!("Please ensure epsilon ({}) is finite and non-negative.", epsilon);
        }
    }
}
