mod controller_scenarios;
mod key_routing;
