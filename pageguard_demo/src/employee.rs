use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use pageguard_models::employee::Employee;
use uuid::uuid;

pub static ALL_EMPLOYEES: LazyLock<Vec<&Employee>> =
    LazyLock::new(|| vec![&AVA, &BEN, &CARLA, &DMITRI, &EMMA, &FINN]);

pub static AVA: LazyLock<Employee> = LazyLock::new(|| Employee {
    id: uuid!("0f9c58bc-6b27-4a55-b442-e33eff8cf7e1").into(),
    name: "Ava Castillo".try_into().unwrap(),
    title: "Staff Engineer".try_into().unwrap(),
    hired_at: Utc.with_ymd_and_hms(2019, 2, 11, 9, 0, 0).unwrap(),
});

pub static BEN: LazyLock<Employee> = LazyLock::new(|| Employee {
    id: uuid!("3a4dc1a9-92d0-4c52-9e6f-2c7dbf66a6e8").into(),
    name: "Ben Okafor".try_into().unwrap(),
    title: "Site Reliability Engineer".try_into().unwrap(),
    hired_at: Utc.with_ymd_and_hms(2020, 6, 1, 8, 30, 0).unwrap(),
});

pub static CARLA: LazyLock<Employee> = LazyLock::new(|| Employee {
    id: uuid!("7f1f9c6e-4b3e-4f39-a5c5-9a1f67c7f3d2").into(),
    name: "Carla Meyer".try_into().unwrap(),
    title: "Product Manager".try_into().unwrap(),
    hired_at: Utc.with_ymd_and_hms(2021, 1, 18, 10, 15, 0).unwrap(),
});

pub static DMITRI: LazyLock<Employee> = LazyLock::new(|| Employee {
    id: uuid!("b2c9e9d4-08e1-4f2d-8a55-5f6f3ce4f1aa").into(),
    name: "Dmitri Volkov".try_into().unwrap(),
    title: "Backend Engineer".try_into().unwrap(),
    hired_at: Utc.with_ymd_and_hms(2022, 9, 5, 9, 45, 0).unwrap(),
});

pub static EMMA: LazyLock<Employee> = LazyLock::new(|| Employee {
    id: uuid!("c4a9d7f2-6a1b-4f83-9d35-1be2a9c5e7b0").into(),
    name: "Emma Lindqvist".try_into().unwrap(),
    title: "Data Engineer".try_into().unwrap(),
    hired_at: Utc.with_ymd_and_hms(2023, 3, 27, 11, 0, 0).unwrap(),
});

pub static FINN: LazyLock<Employee> = LazyLock::new(|| Employee {
    id: uuid!("d8e3b1c7-2f64-4a0e-bb1d-7c93f0a2d6c4").into(),
    name: "Finn Gallagher".try_into().unwrap(),
    title: "Frontend Engineer".try_into().unwrap(),
    hired_at: Utc.with_ymd_and_hms(2024, 7, 15, 8, 0, 0).unwrap(),
});
