use sevcsik::lang::parse;
use sevcsik::mach::{Cpu, Event, Memory};

#[allow(dead_code)]
pub fn machine(source: &str) -> Cpu {
    machine_sized(source, 64, 8)
}

#[allow(dead_code)]
pub fn machine_sized(source: &str, capacity: usize, registers: usize) -> Cpu {
    let program = parse(source).unwrap();
    let mut memory = Memory::new(capacity);
    program.load(&mut memory).unwrap();
    Cpu::new(memory, registers)
}

#[allow(dead_code)]
pub fn exec(cpu: &mut Cpu) -> String {
    exec_n(cpu, 5000)
}

#[allow(dead_code)]
pub fn exec_n(cpu: &mut Cpu, cycles: usize) -> String {
    let entry = cpu.memory().position();
    let mut s = String::new();
    let mut prev_running = false;
    cpu.run(entry);
    loop {
        let event = cpu.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Trace(addr, inst) => {
                s.push_str(&format!("{}: \t{}\n", addr, inst));
            }
            Event::Print(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Finished => {
                s.push_str("CPU: no more instructions, terminating\n");
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
