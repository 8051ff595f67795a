use super::{Address, Cpu, Event, Instruction, Memory, State};

mod self_modify_test;

fn machine(capacity: usize, placements: Vec<(Address, Instruction)>) -> Cpu {
    let mut mem = Memory::new(capacity);
    for (addr, inst) in placements {
        mem.put(inst, addr).unwrap();
    }
    Cpu::new(mem, 8)
}

fn run(cpu: &mut Cpu, entry: Address) -> String {
    run_cycles(cpu, entry, 5000)
}

fn run_cycles(cpu: &mut Cpu, entry: Address, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    cpu.run(entry);
    loop {
        let event = cpu.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Trace(addr, inst) => s.push_str(&format!("{}: \t{}\n", addr, inst)),
            Event::Print(line) => s.push_str(&format!("{}\n", line)),
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Finished => s.push_str("CPU: no more instructions, terminating\n"),
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        prev_running = event == Event::Running;
    }
    s
}

#[test]
fn test_fetch_exhaustion() {
    let mut cpu = machine(2, vec![(0, Instruction::Load(1.0, 0))]);
    assert_eq!(
        run(&mut cpu, 0),
        "0: \tLoad 1 to *0\nCPU: no more instructions, terminating\n"
    );
    assert_eq!(cpu.state(), State::Halted);
    assert_eq!(cpu.register(0), Some(1.0));
}

#[test]
fn test_runs_off_the_end() {
    let mut cpu = machine(
        3,
        vec![
            (0, Instruction::Load(1.0, 0)),
            (1, Instruction::Load(2.0, 1)),
            (2, Instruction::Add(0, 1, 2)),
        ],
    );
    let out = run(&mut cpu, 1);
    assert_eq!(out.lines().count(), 3);
    assert!(out.starts_with("1: \tLoad 2 to *1\n"));
    assert_eq!(cpu.register(2), Some(2.0));
    assert_eq!(cpu.memory().position(), 3);
}

#[test]
fn test_error_aborts_and_keeps_partial_effects() {
    let mut cpu = machine(
        4,
        vec![
            (0, Instruction::Load(3.0, 0)),
            (1, Instruction::Get(3, 1)),
            (2, Instruction::Load(9.0, 2)),
        ],
    );
    cpu.set_trace(false);
    assert_eq!(run(&mut cpu, 0), "Instruction 1: Can't access address (@3)\n");
    assert_eq!(cpu.register(0), Some(3.0));
    assert_eq!(cpu.register(2), Some(0.0));
}

#[test]
fn test_runaway_program() {
    let mut cpu = machine(1, vec![(0, Instruction::Goto(0))]);
    cpu.set_trace(false);
    assert_eq!(
        run_cycles(&mut cpu, 0, 10),
        "\n10 Execution cycles exceeded.\n"
    );
    assert_eq!(cpu.state(), State::Running);
}
