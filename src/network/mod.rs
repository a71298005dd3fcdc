/*
 * This module defines the weighted graph model the shortest-path engines run on.
 * It also provides the extended-integer distance type and random graph generation.
 */

pub mod distance;
pub mod generator;
pub mod graph;
