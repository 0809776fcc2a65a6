// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end removal against an in-process executor.
//!
//! The executor task consumes commands from the channel and answers each
//! one with a `getresponse`, the way the remote side does in sync mode.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use sairedis::{
    Command, FdbEntry, InProcessChannel, IpPrefix, MacAddress, MemoryRecordSink, ObjectId,
    ObjectIdentity, ObjectType, Recorder, Remover, RemoverBuilder, ResponseQueueWaiter,
    ResponseSender, RouteEntry, SaiEntry, SaiStatus,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SWITCH_ID: ObjectId = ObjectId(0x21000000000000);

/// Spawn an executor answering every command with `status_for(command)`,
/// forwarding the commands it saw.
fn spawn_executor<F>(
    mut commands: mpsc::UnboundedReceiver<Command>,
    responses: ResponseSender,
    status_for: F,
) -> (JoinHandle<()>, mpsc::UnboundedReceiver<Command>)
where
    F: Fn(&Command) -> SaiStatus + Send + 'static,
{
    let (seen_tx, seen_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            let status = status_for(&command);
            let _ = seen_tx.send(command);
            if responses.send_status(status).is_err() {
                break;
            }
        }
    });
    (task, seen_rx)
}

struct Setup {
    remover: Arc<Remover<InProcessChannel, ResponseQueueWaiter>>,
    sink: Arc<MemoryRecordSink>,
    responses: ResponseSender,
    commands: Option<mpsc::UnboundedReceiver<Command>>,
}

fn setup() -> Setup {
    let (channel, commands) = InProcessChannel::new();
    let (waiter, responses) = ResponseQueueWaiter::new(Duration::from_secs(5));
    let sink = Arc::new(MemoryRecordSink::new());

    let remover = RemoverBuilder::new(channel, waiter)
        .recorder(Arc::new(Recorder::new(sink.clone())))
        .build();

    Setup {
        remover: Arc::new(remover),
        sink,
        responses,
        commands: Some(commands),
    }
}

fn route(octet: u8) -> RouteEntry {
    RouteEntry {
        switch_id: SWITCH_ID,
        vr_id: ObjectId(0x3000000000022),
        destination: IpPrefix::new(IpAddr::V4(Ipv4Addr::new(10, octet, 0, 0)), 16),
    }
}

fn fdb(last: u8) -> FdbEntry {
    FdbEntry {
        switch_id: SWITCH_ID,
        mac_address: MacAddress([0x52, 0x54, 0x00, 0x00, 0x00, last]),
        bv_id: ObjectId(0x26000000000001),
    }
}

#[tokio::test]
async fn test_remove_route_scenario() {
    let mut s = setup();
    let (executor, mut seen) = spawn_executor(
        s.commands.take().unwrap(),
        s.responses.clone(),
        |_| SaiStatus::Success,
    );

    let route_a = route(1);
    let key = format!(
        "SAI_OBJECT_TYPE_ROUTE_ENTRY:{}",
        route_a.serialize_entry().unwrap()
    );

    let status = s
        .remover
        .remove(ObjectType::RouteEntry, &route_a.into())
        .await
        .unwrap();

    assert_eq!(status, SaiStatus::Success);
    assert_eq!(s.sink.lines(), vec![format!("r|{}", key)]);
    assert_eq!(
        seen.recv().await.unwrap(),
        Command::Del {
            key,
            op: "remove".to_string(),
        }
    );

    executor.abort();
}

#[tokio::test]
async fn test_bulk_remove_fdb_scenario() {
    let mut s = setup();
    let (executor, mut seen) = spawn_executor(
        s.commands.take().unwrap(),
        s.responses.clone(),
        |_| SaiStatus::Success,
    );

    let entries: Vec<ObjectIdentity> = vec![fdb(1).into(), fdb(2).into(), fdb(3).into()];
    let ids: Vec<String> = [fdb(1), fdb(2), fdb(3)]
        .iter()
        .map(|e| e.serialize_entry().unwrap())
        .collect();

    let statuses = s
        .remover
        .bulk_remove(ObjectType::FdbEntry, &entries)
        .await
        .unwrap();

    assert_eq!(statuses, vec![SaiStatus::Success; 3]);
    assert_eq!(
        s.sink.lines(),
        vec![format!(
            "R|SAI_OBJECT_TYPE_FDB_ENTRY||{}|||{}|||{}|",
            ids[0], ids[1], ids[2]
        )]
    );

    match seen.recv().await.unwrap() {
        Command::Set { key, values, op } => {
            assert_eq!(key, "SAI_OBJECT_TYPE_FDB_ENTRY:3");
            assert_eq!(op, "bulkremove");
            let fields: Vec<&str> = values.iter().map(|(f, _)| f.as_str()).collect();
            assert_eq!(fields, ids.iter().map(String::as_str).collect::<Vec<_>>());
            assert!(values.iter().all(|(_, v)| v.is_empty()));
        }
        other => panic!("unexpected command: {:?}", other),
    }

    executor.abort();
}

#[tokio::test]
async fn test_bulk_remove_empty_neighbor_batch() {
    let s = setup();
    let mut commands = s.commands.unwrap();

    // no command reaches the executor, yet the wait still consumes one response
    s.responses.send_status(SaiStatus::Success).unwrap();

    let statuses = s
        .remover
        .bulk_remove(ObjectType::NeighborEntry, &[])
        .await
        .unwrap();

    assert!(statuses.is_empty());
    assert!(commands.try_recv().is_err());
    assert_eq!(s.sink.lines(), vec!["R|SAI_OBJECT_TYPE_NEIGHBOR_ENTRY"]);
}

#[tokio::test]
async fn test_concurrent_removals_keep_record_order() {
    let mut s = setup();
    let (executor, mut seen) = spawn_executor(
        s.commands.take().unwrap(),
        s.responses.clone(),
        |command| {
            if command.key().ends_with("oid:0x3") {
                SaiStatus::ObjectInUse
            } else {
                SaiStatus::Success
            }
        },
    );

    let mut tasks = Vec::new();
    for id in 1..=8u64 {
        let remover = Arc::clone(&s.remover);
        tasks.push(tokio::spawn(async move {
            let status = remover
                .remove_object(ObjectType::NextHop, ObjectId(id))
                .await
                .unwrap();
            (id, status)
        }));
    }

    for task in tasks {
        let (id, status) = task.await.unwrap();
        let expected = if id == 3 {
            SaiStatus::ObjectInUse
        } else {
            SaiStatus::Success
        };
        assert_eq!(status, expected, "status for oid {}", id);
    }

    let mut channel_order = Vec::new();
    while let Ok(command) = seen.try_recv() {
        channel_order.push(format!("r|{}", command.key()));
    }
    assert_eq!(channel_order.len(), 8);
    assert_eq!(s.sink.lines(), channel_order);

    executor.abort();
}

#[tokio::test]
async fn test_switch_removal_round_trip() {
    let (channel, commands) = InProcessChannel::new();
    let (waiter, responses) = ResponseQueueWaiter::new(Duration::from_secs(5));
    let released = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let released_clone = Arc::clone(&released);

    let remover = RemoverBuilder::new(channel, waiter)
        .virtual_id_release(move |switch_id: ObjectId| released_clone.lock().push(switch_id))
        .build();

    let (executor, _seen) = spawn_executor(commands, responses, |_| SaiStatus::Success);

    let status = remover
        .remove_object(ObjectType::Switch, SWITCH_ID)
        .await
        .unwrap();

    assert_eq!(status, SaiStatus::Success);
    assert_eq!(*released.lock(), vec![SWITCH_ID]);

    executor.abort();
}

#[tokio::test(start_paused = true)]
async fn test_silent_executor_times_out() {
    let (channel, _commands) = InProcessChannel::new();
    let (waiter, _responses) = ResponseQueueWaiter::new(Duration::from_millis(200));
    let sink = Arc::new(MemoryRecordSink::new());

    let remover = RemoverBuilder::new(channel, waiter)
        .recorder(Arc::new(Recorder::new(sink.clone())))
        .build();

    let err = remover
        .remove_object(ObjectType::Port, ObjectId(0x1000000000002))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.status(), SaiStatus::Failure);
    // recorded before the write, never rolled back
    assert_eq!(sink.lines(), vec!["r|SAI_OBJECT_TYPE_PORT:oid:0x1000000000002"]);
}

#[tokio::test(start_paused = true)]
async fn test_late_response_does_not_shift_later_statuses() {
    let (channel, mut commands) = InProcessChannel::new();
    let (waiter, responses) = ResponseQueueWaiter::new(Duration::from_millis(100));
    let remover = RemoverBuilder::new(channel, waiter).build();

    let err = remover
        .remove_object(ObjectType::Port, ObjectId(0x1))
        .await
        .unwrap_err();
    assert!(err.is_timeout());

    // the executor answers the first removal only after it timed out
    responses.send_status(SaiStatus::ObjectInUse).unwrap();
    responses.send_status(SaiStatus::Success).unwrap();

    let status = remover
        .remove_object(ObjectType::Port, ObjectId(0x2))
        .await
        .unwrap();
    assert_eq!(status, SaiStatus::Success);

    // one response per later call, nothing left behind
    responses.send_status(SaiStatus::ItemNotFound).unwrap();
    let statuses = remover
        .bulk_remove_objects(ObjectType::Port, &[ObjectId(0x3), ObjectId(0x4)])
        .await
        .unwrap();
    assert_eq!(statuses, vec![SaiStatus::ItemNotFound; 2]);

    let keys: Vec<String> = std::iter::from_fn(|| commands.try_recv().ok())
        .map(|command| command.key().to_string())
        .collect();
    assert_eq!(
        keys,
        vec![
            "SAI_OBJECT_TYPE_PORT:oid:0x1",
            "SAI_OBJECT_TYPE_PORT:oid:0x2",
            "SAI_OBJECT_TYPE_PORT:2",
        ]
    );
}
