mod edger;
