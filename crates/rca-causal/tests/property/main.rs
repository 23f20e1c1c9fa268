mod forest_properties;
