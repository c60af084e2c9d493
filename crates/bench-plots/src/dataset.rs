// File: crates/bench-plots/src/dataset.rs
// Summary: Benchmark measurements of the key-value server as typed, named datasets.
//
// Two datasets exist and are deliberately kept apart:
// - `recorded`: the tables written down during the benchmark runs.
// - `plotted`: the arrays the first published charts were drawn from. They are
//   hand-copied subsets of the tables and disagree with them in places
//   (rotate utilization at the database), so neither overrides the other.

use std::fmt;

/// Concurrent clients for every run. The 25-client run failed (disk full) and has no data.
pub const CLIENT_COUNTS: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 10.0, 15.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Create,
    Read,
    Rotate,
    Delete,
}

impl Command {
    pub const ALL: [Command; 4] = [Self::Create, Self::Read, Self::Rotate, Self::Delete];

    /// Column of this command in the utilization tables.
    pub fn column(&self) -> usize {
        match self {
            Self::Create => 0,
            Self::Read => 1,
            Self::Rotate => 2,
            Self::Delete => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Rotate => "rotate",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine whose resource usage was sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Host {
    Database,
    Server,
}

impl Host {
    pub const ALL: [Host; 2] = [Self::Database, Self::Server];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Cpu,
    Disk,
    Ram,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Self::Cpu, Self::Disk, Self::Ram];

    /// Series name used on utilization charts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu utilization",
            Self::Disk => "disk utilization",
            Self::Ram => "ram utilization",
        }
    }
}

/// Load generator figures for one client count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Load {
    /// Average throughput, requests per second.
    pub throughput: f64,
    /// Average response time, milliseconds.
    pub response_ms: f64,
}

/// Resource utilization percentages for one client count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Usage {
    pub cpu: f64,
    pub disk: f64,
    pub ram: f64,
}

impl Usage {
    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Cpu => self.cpu,
            Resource::Disk => self.disk,
            Resource::Ram => self.ram,
        }
    }
}

const fn l(throughput: f64, response_ms: f64) -> Load {
    Load { throughput, response_ms }
}

const fn u(cpu: f64, disk: f64, ram: f64) -> Usage {
    Usage { cpu, disk, ram }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub name: &'static str,
    pub clients: Vec<f64>,
    load: Vec<(Command, Vec<Load>)>,
    usage: Vec<(Host, Command, Vec<Usage>)>,
}

impl Dataset {
    pub fn load(&self, command: Command) -> Option<&[Load]> {
        self.load.iter().find(|(c, _)| *c == command).map(|(_, v)| v.as_slice())
    }

    pub fn throughput(&self, command: Command) -> Option<Vec<f64>> {
        self.load(command).map(|v| v.iter().map(|x| x.throughput).collect())
    }

    pub fn response_time(&self, command: Command) -> Option<Vec<f64>> {
        self.load(command).map(|v| v.iter().map(|x| x.response_ms).collect())
    }

    /// Commands that have load figures, in table order.
    pub fn load_commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.load.iter().map(|(c, _)| *c)
    }

    pub fn usage(&self, host: Host, command: Command) -> Option<&[Usage]> {
        self.usage
            .iter()
            .find(|(h, c, _)| *h == host && *c == command)
            .map(|(_, _, v)| v.as_slice())
    }

    pub fn utilization(&self, host: Host, command: Command, resource: Resource) -> Option<Vec<f64>> {
        self.usage(host, command).map(|v| v.iter().map(|x| x.get(resource)).collect())
    }

    /// `(host, command)` pairs that have utilization samples, in table order.
    pub fn usage_keys(&self) -> impl Iterator<Item = (Host, Command)> + '_ {
        self.usage.iter().map(|(h, c, _)| (*h, *c))
    }
}

// Rows are client counts, columns are create/read/rotate/delete.
const DATABASE_USAGE: [[Usage; 4]; 6] = [
    [u(36.41, 0.73, 62.3), u(32.01, 0.025, 62.69), u(30.21, 0.052, 62.71), u(37.49, 0.07, 62.57)],
    [u(41.63, 0.87, 63.27), u(50.96, 0.07, 63.85), u(46.41, 0.0066, 63.85), u(49.73, 0.045, 63.72)],
    [u(42.45, 0.818, 63.4), u(49.49, 0.008, 63.75), u(46.79, 0.014, 63.78), u(50.59, 0.0733, 63.95)],
    [u(41.57, 0.8, 63.8), u(51.97, 0.052, 63.94), u(47.25, 0.004, 63.81), u(48.33, 0.18, 62.28)],
    [u(47.88, 0.004, 68.58), u(30.01, 0.86, 74.34), u(49.37, 0.018, 74.33), u(48.1, 0.02, 74.23)],
    [u(51.09, 1.16, 54.99), u(44.01, 0.033, 70.42), u(50.22, 0.54, 70.6), u(46.25, 0.04, 70.66)],
];

const SERVER_USAGE: [[Usage; 4]; 6] = [
    [u(37.06, 0.737, 62.39), u(33.32, 0.066, 62.69), u(30.70, 0.01, 62.71), u(36.49, 0.07, 62.57)],
    [u(41.44, 0.87, 63.27), u(50.96, 0.07, 63.85), u(46.41, 0.0066, 63.85), u(49.72, 0.045, 63.75)],
    [u(42.88, 0.81, 63.0), u(49.49, 0.008, 63.75), u(49.797, 0.0146, 63.78), u(50.59, 0.073, 63.95)],
    [u(41.30, 0.8, 63.8), u(51.9, 0.05, 63.94), u(47.2537, 0.004, 63.8), u(48.33, 0.18, 62.28)],
    [u(41.1, 0.95, 61.46), u(53.48, 0.016, 62.63), u(50.61, 0.05, 52.79), u(46.38, 0.06, 63.006)],
    [u(50.6, 1.18, 54.99), u(44.01, 0.033, 70.42), u(50.22, 0.05, 70.68), u(46.25, 0.04, 70.66)],
];

fn column(table: &[[Usage; 4]; 6], command: Command) -> Vec<Usage> {
    table.iter().map(|row| row[command.column()]).collect()
}

/// The tables recorded during the benchmark runs. Delete has no load figures.
pub fn recorded() -> Dataset {
    let load = vec![
        (
            Command::Create,
            vec![l(93.20, 10.19), l(126.1, 16.17), l(120.557, 22.86), l(125.39, 20.32), l(115.3, 47.28), l(116.0, 88.15)],
        ),
        (
            Command::Read,
            // 216.223 at 15 clients is kept as written.
            vec![l(1078.0, 0.196), l(2127.0, 0.29), l(2155.0, 1.02), l(2097.0, 1.61), l(2161.0, 1.92), l(216.223, 4.69)],
        ),
        (
            Command::Rotate,
            vec![l(761.29, 1.026), l(1276.0, 1.13), l(1393.0, 1.71), l(1316.19, 3.16), l(1333.0, 6.64), l(1362.0, 10.25)],
        ),
    ];

    let mut usage = Vec::new();
    for (host, table) in [(Host::Database, &DATABASE_USAGE), (Host::Server, &SERVER_USAGE)] {
        for command in Command::ALL {
            usage.push((host, command, column(table, command)));
        }
    }

    Dataset { name: "recorded", clients: CLIENT_COUNTS.to_vec(), load, usage }
}

/// The arrays the first published rotate charts were drawn from.
pub fn plotted() -> Dataset {
    let throughput = [761.29, 1276.0, 1393.0, 1316.19, 1333.0, 1362.0];
    let response = [1.026, 1.13, 1.71, 3.16, 6.64, 10.25];
    let load = vec![(
        Command::Rotate,
        throughput.iter().zip(response).map(|(&t, r)| l(t, r)).collect(),
    )];

    let cpu = [30.21, 46.21, 46.79, 47.25, 49.37, 50.22];
    let disk = [0.052, 0.0066, 0.014, 0.004, 0.018, 0.054];
    let ram = [62.3, 63.27, 63.4, 63.0, 74.0, 70.0];
    let rotate_db = (0..CLIENT_COUNTS.len()).map(|i| u(cpu[i], disk[i], ram[i])).collect();

    Dataset {
        name: "plotted",
        clients: CLIENT_COUNTS.to_vec(),
        load,
        usage: vec![(Host::Database, Command::Rotate, rotate_db)],
    }
}

/// Every named dataset, in catalog order.
pub fn all() -> Vec<Dataset> {
    vec![plotted(), recorded()]
}
